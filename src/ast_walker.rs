// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Shared AST traversal for analysis passes.
//!
//! Provides the common pre-order-visitor pattern so highlighting and
//! outline passes do not each hand-roll the same recursive match:
//!
//! - [`for_each_block`] — iterate every statement block in a program
//!   (the top level plus all nested bodies).
//! - [`walk_expression`] — pre-order walk of a single expression tree.
//! - [`walk_statement`] — pre-order walk of all expressions under one
//!   statement.
//! - [`walk_program`] — pre-order walk of all expressions in a program.
//!
//! Passes with state that must be threaded through the traversal keep
//! their own recursion; this module covers the stateless visitor case.

use crate::ast::{Expression, Program, Statement};

// ── Block iterator ────────────────────────────────────────────────────────────

/// Calls `f` once for each statement block in the program, in source order.
///
/// The top-level statement list is visited first, then every `if`, `elif`,
/// `else`, `while`, and `def` body, recursively.
pub fn for_each_block<F>(program: &Program, mut f: F)
where
    F: FnMut(&[Statement]),
{
    f(&program.statements);
    for statement in &program.statements {
        blocks_in_statement(statement, &mut f);
    }
}

fn blocks_in_statement<F>(statement: &Statement, f: &mut F)
where
    F: FnMut(&[Statement]),
{
    let mut visit = |body: &[Statement], f: &mut F| {
        f(body);
        for statement in body {
            blocks_in_statement(statement, f);
        }
    };
    match statement {
        Statement::If {
            body,
            elif_clauses,
            else_body,
            ..
        } => {
            visit(body, f);
            for clause in elif_clauses {
                visit(&clause.body, f);
            }
            if let Some(else_body) = else_body {
                visit(else_body, f);
            }
        }
        Statement::While { body, .. } | Statement::FunctionDef { body, .. } => visit(body, f),
        Statement::Assignment { .. } | Statement::Expression(_) | Statement::Return { .. } => {}
    }
}

// ── Expression walker ─────────────────────────────────────────────────────────

/// Recursively walks an expression tree in pre-order, calling `f` on every
/// node before its children.
pub fn walk_expression<F>(expression: &Expression, f: &mut F)
where
    F: FnMut(&Expression),
{
    f(expression);
    match expression {
        Expression::Call { arguments, .. } => {
            for argument in arguments {
                walk_expression(argument, f);
            }
        }
        Expression::Binary { left, right, .. } => {
            walk_expression(left, f);
            walk_expression(right, f);
        }
        Expression::Unary { operand, .. } => walk_expression(operand, f),
        Expression::Number(_)
        | Expression::String(_)
        | Expression::Boolean(_)
        | Expression::None
        | Expression::Identifier(_) => {}
    }
}

/// Walks every expression under one statement, in pre-order.
pub fn walk_statement<F>(statement: &Statement, f: &mut F)
where
    F: FnMut(&Expression),
{
    match statement {
        Statement::Assignment { value, .. } => walk_expression(value, f),
        Statement::Expression(expression) => walk_expression(expression, f),
        Statement::If {
            condition,
            body,
            elif_clauses,
            else_body,
        } => {
            walk_expression(condition, f);
            for statement in body {
                walk_statement(statement, f);
            }
            for clause in elif_clauses {
                walk_expression(&clause.condition, f);
                for statement in &clause.body {
                    walk_statement(statement, f);
                }
            }
            if let Some(else_body) = else_body {
                for statement in else_body {
                    walk_statement(statement, f);
                }
            }
        }
        Statement::While { condition, body } => {
            walk_expression(condition, f);
            for statement in body {
                walk_statement(statement, f);
            }
        }
        Statement::FunctionDef { body, .. } => {
            for statement in body {
                walk_statement(statement, f);
            }
        }
        Statement::Return { value } => {
            if let Some(value) = value {
                walk_expression(value, f);
            }
        }
    }
}

/// Convenience: pre-order walk of all expressions in a program.
pub fn walk_program<F>(program: &Program, mut f: F)
where
    F: FnMut(&Expression),
{
    for statement in &program.statements {
        walk_statement(statement, &mut f);
    }
}
