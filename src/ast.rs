// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract syntax tree for Pyrite.
//!
//! The tree is deliberately plain data: public fields, `Clone`,
//! `PartialEq`, no interior references back into the source. Consumers
//! that need source locations take them from the diagnostics stream
//! rather than from the tree itself.
//!
//! Operators are closed enums rather than the operator's source text, so
//! downstream matches are exhaustive and misspelled operators are caught
//! at the parser boundary instead of leaking into consumers.
//!
//! The [`Display`](std::fmt::Display) impl on [`Program`] renders an
//! indented outline of the tree, two spaces per level, which is what the
//! structure view in the editor shows.

use ecow::EcoString;

/// A complete parsed source snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates a program from its top-level statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Renders the indented outline of the tree.
    ///
    /// Equivalent to `to_string`, named for discoverability at call sites
    /// that are not otherwise formatting.
    #[must_use]
    pub fn to_tree_string(&self) -> String {
        self.to_string()
    }
}

/// One `elif` arm of an [`Statement::If`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElifClause {
    /// The arm's guard expression.
    pub condition: Expression,
    /// The statements executed when the guard is the first to hold.
    pub body: Vec<Statement>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `target = value`
    Assignment {
        /// The variable being assigned. Only plain identifiers are valid
        /// targets.
        target: EcoString,
        /// The assigned expression.
        value: Expression,
    },
    /// An expression evaluated for its effect, e.g. a call.
    Expression(Expression),
    /// `if` / `elif` / `else`
    If {
        /// The `if` guard.
        condition: Expression,
        /// The `if` arm's body.
        body: Vec<Statement>,
        /// Zero or more `elif` arms, in source order.
        elif_clauses: Vec<ElifClause>,
        /// The `else` body, if present.
        else_body: Option<Vec<Statement>>,
    },
    /// `while`
    While {
        /// The loop guard.
        condition: Expression,
        /// The loop body.
        body: Vec<Statement>,
    },
    /// `def name(params):`
    FunctionDef {
        /// The function name.
        name: EcoString,
        /// Parameter names, in declaration order.
        params: Vec<EcoString>,
        /// The function body.
        body: Vec<Statement>,
    },
    /// `return` with an optional value.
    Return {
        /// The returned expression, or `None` for a bare `return`.
        value: Option<Expression>,
    },
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A numeric literal. All Pyrite numbers are 64-bit floats.
    Number(f64),
    /// A string literal, delimiters already stripped.
    String(EcoString),
    /// `True` or `False`
    Boolean(bool),
    /// `None`
    None,
    /// A variable reference.
    Identifier(EcoString),
    /// A function call. Callees are names, not arbitrary expressions.
    Call {
        /// The called function's name. The `print` built-in arrives here
        /// as the name `print`.
        callee: EcoString,
        /// Argument expressions, in source order.
        arguments: Vec<Expression>,
    },
    /// A binary operation.
    Binary {
        /// Left operand.
        left: Box<Expression>,
        /// The operator.
        operator: BinaryOp,
        /// Right operand.
        right: Box<Expression>,
    },
    /// A unary operation.
    Unary {
        /// The operator.
        operator: UnaryOp,
        /// The operand.
        operand: Box<Expression>,
    },
}

impl Expression {
    /// Builds a binary expression, boxing the operands.
    #[must_use]
    pub fn binary(left: Self, operator: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Builds a unary expression, boxing the operand.
    #[must_use]
    pub fn unary(operator: UnaryOp, operand: Self) -> Self {
        Self::Unary {
            operator,
            operand: Box::new(operand),
        }
    }
}

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `and`
    And,
    /// `or`
    Or,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "and",
            Self::Or => "or",
        };
        f.write_str(text)
    }
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+`
    Pos,
    /// `not`
    Not,
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Neg => "-",
            Self::Pos => "+",
            Self::Not => "not",
        };
        f.write_str(text)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Program")?;
        for statement in &self.statements {
            fmt_statement(f, statement, 1)?;
        }
        Ok(())
    }
}

fn indent(f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
    for _ in 0..level {
        f.write_str("  ")?;
    }
    Ok(())
}

fn fmt_statement(
    f: &mut std::fmt::Formatter<'_>,
    statement: &Statement,
    level: usize,
) -> std::fmt::Result {
    indent(f, level)?;
    match statement {
        Statement::Assignment { target, value } => {
            writeln!(f, "Assignment: {target}")?;
            fmt_expression(f, value, level + 1)
        }
        Statement::Expression(expression) => {
            writeln!(f, "ExpressionStatement")?;
            fmt_expression(f, expression, level + 1)
        }
        Statement::If {
            condition,
            body,
            elif_clauses,
            else_body,
        } => {
            writeln!(f, "If")?;
            fmt_labelled_block(f, "condition", level + 1, |f, level| {
                fmt_expression(f, condition, level)
            })?;
            fmt_labelled_block(f, "body", level + 1, |f, level| {
                fmt_statements(f, body, level)
            })?;
            for clause in elif_clauses {
                fmt_labelled_block(f, "elif condition", level + 1, |f, level| {
                    fmt_expression(f, &clause.condition, level)
                })?;
                fmt_labelled_block(f, "elif body", level + 1, |f, level| {
                    fmt_statements(f, &clause.body, level)
                })?;
            }
            if let Some(else_body) = else_body {
                fmt_labelled_block(f, "else body", level + 1, |f, level| {
                    fmt_statements(f, else_body, level)
                })?;
            }
            Ok(())
        }
        Statement::While { condition, body } => {
            writeln!(f, "While")?;
            fmt_labelled_block(f, "condition", level + 1, |f, level| {
                fmt_expression(f, condition, level)
            })?;
            fmt_labelled_block(f, "body", level + 1, |f, level| {
                fmt_statements(f, body, level)
            })
        }
        Statement::FunctionDef { name, params, body } => {
            let params = params
                .iter()
                .map(EcoString::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "FunctionDef: {name}({params})")?;
            fmt_labelled_block(f, "body", level + 1, |f, level| {
                fmt_statements(f, body, level)
            })
        }
        Statement::Return { value } => {
            writeln!(f, "Return")?;
            match value {
                Some(value) => fmt_expression(f, value, level + 1),
                None => Ok(()),
            }
        }
    }
}

fn fmt_statements(
    f: &mut std::fmt::Formatter<'_>,
    statements: &[Statement],
    level: usize,
) -> std::fmt::Result {
    for statement in statements {
        fmt_statement(f, statement, level)?;
    }
    Ok(())
}

fn fmt_labelled_block(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    level: usize,
    contents: impl FnOnce(&mut std::fmt::Formatter<'_>, usize) -> std::fmt::Result,
) -> std::fmt::Result {
    indent(f, level)?;
    writeln!(f, "{label}:")?;
    contents(f, level + 1)
}

fn fmt_expression(
    f: &mut std::fmt::Formatter<'_>,
    expression: &Expression,
    level: usize,
) -> std::fmt::Result {
    indent(f, level)?;
    match expression {
        Expression::Number(value) => writeln!(f, "Number: {value}"),
        Expression::String(value) => writeln!(f, "String: {value:?}"),
        Expression::Boolean(value) => {
            writeln!(f, "Boolean: {}", if *value { "True" } else { "False" })
        }
        Expression::None => writeln!(f, "None"),
        Expression::Identifier(name) => writeln!(f, "Identifier: {name}"),
        Expression::Call { callee, arguments } => {
            writeln!(f, "Call: {callee}")?;
            for argument in arguments {
                fmt_expression(f, argument, level + 1)?;
            }
            Ok(())
        }
        Expression::Binary {
            left,
            operator,
            right,
        } => {
            writeln!(f, "BinaryOp: {operator}")?;
            fmt_expression(f, left, level + 1)?;
            fmt_expression(f, right, level + 1)
        }
        Expression::Unary { operator, operand } => {
            writeln!(f, "UnaryOp: {operator}")?;
            fmt_expression(f, operand, level + 1)
        }
    }
}
