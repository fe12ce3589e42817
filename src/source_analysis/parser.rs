// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parser for Pyrite source code.
//!
//! This module builds a [`Program`] AST from the token stream produced by
//! the [lexer](super::lexer). It is a hand-written recursive descent
//! parser with precedence climbing for expressions.
//!
//! # Error Recovery
//!
//! The parser never aborts on malformed input. Each statement is parsed
//! inside a [`ParseResult`] boundary: on failure the diagnostic is
//! recorded, tokens are discarded through the next `Newline`, and parsing
//! resumes at the following statement. The caller always receives a
//! [`Program`] holding every statement that parsed cleanly plus the full
//! list of [`Diagnostic`]s, which is what an editor needs to keep
//! highlighting and outlining while the user types broken code.
//!
//! # Grammar
//!
//! Statements are newline-terminated and blocks are delimited by
//! `Indent`/`Dedent` tokens. Expression precedence, lowest to highest:
//!
//! ```text
//! or
//! and
//! not          (prefix)
//! == != < > <= >=
//! + -
//! * / %
//! unary + -    (prefix)
//! primary      (literals, identifiers, calls, parentheses)
//! ```
//!
//! `Comment` tokens are skipped transparently by the token cursor, so a
//! trailing comment never changes how a statement parses.

use ecow::EcoString;

use crate::ast::{BinaryOp, ElifClause, Expression, Program, Statement, UnaryOp};

use super::{Span, Token, TokenKind};

/// A parse diagnostic attached to a source location.
///
/// Diagnostics are ordinary data rather than `Err` values at the API
/// boundary: the parser collects them and keeps going.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: Severity,
    /// Human-readable description of the problem.
    pub message: EcoString,
    /// The kind of token where the problem was detected.
    pub found: TokenKind,
    /// The text of that token.
    pub found_text: EcoString,
    /// The 1-based line of the offending token.
    pub line: u32,
    /// The 0-based column of the offending token.
    pub column: u32,
    /// The byte span of the offending token.
    pub span: Span,
}

impl Diagnostic {
    /// Creates an error diagnostic located at `token`.
    #[must_use]
    pub fn error(message: impl Into<EcoString>, token: &Token) -> Self {
        Self::with_severity(Severity::Error, message, token)
    }

    /// Creates a warning diagnostic located at `token`.
    #[must_use]
    pub fn warning(message: impl Into<EcoString>, token: &Token) -> Self {
        Self::with_severity(Severity::Warning, message, token)
    }

    fn with_severity(severity: Severity, message: impl Into<EcoString>, token: &Token) -> Self {
        Self {
            severity,
            message: message.into(),
            found: token.kind(),
            found_text: token.text().into(),
            line: token.line(),
            column: token.column(),
            span: token.span(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parse error at line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

/// The severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The construct could not be parsed.
    Error,
    /// The construct parsed but is suspect.
    Warning,
}

/// Internal result type: errors propagate with `?` up to the statement
/// boundary, where they are converted into recorded diagnostics.
type ParseResult<T> = Result<T, Diagnostic>;

/// Parses a token stream into a program.
///
/// Never fails: malformed statements are skipped and reported through the
/// returned diagnostics. The token stream is expected to come from
/// [`tokenize`](super::tokenize) and end with an `Eof` token; a missing
/// `Eof` is tolerated for robustness.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<Diagnostic>) {
    Parser::new(tokens).parse_program()
}

/// A recursive descent parser over a lexed token stream.
struct Parser {
    tokens: Vec<Token>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind() != TokenKind::Eof) {
            let (line, end) = tokens
                .last()
                .map_or((1, 0), |t| (t.line(), t.span().end()));
            tokens.push(Token::new(
                TokenKind::Eof,
                "".into(),
                line,
                0,
                Span::new(end, end),
            ));
        }
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    fn parse_program(mut self) -> (Program, Vec<Diagnostic>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            // Blank lines between statements.
            while self.match_kind(TokenKind::Newline) {}
            if self.is_at_end() {
                break;
            }

            match self.parse_statement() {
                Ok(statement) => {
                    statements.push(statement);
                    // A statement must be followed by a line boundary.
                    if !matches!(
                        self.peek().kind(),
                        TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof
                    ) {
                        self.diagnostics.push(Diagnostic::error(
                            format!("expected a newline after statement, found {}", self.peek()),
                            self.peek(),
                        ));
                        self.synchronize();
                    }
                }
                Err(diagnostic) => {
                    self.diagnostics.push(diagnostic);
                    self.synchronize();
                }
            }
        }

        (Program::new(statements), self.diagnostics)
    }

    // === Statements ===

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek().kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Def => self.parse_function_def(),
            TokenKind::Return => self.parse_return(),
            _ => self.parse_assignment_or_expression(),
        }
    }

    /// Parses either `target = expression` or a bare expression statement.
    ///
    /// Assignment is not an expression, so there is no lookahead dance:
    /// parse an expression, and if `=` follows it must have been a plain
    /// identifier.
    fn parse_assignment_or_expression(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression()?;

        if self.check(TokenKind::Assign) {
            let assign = self.advance();
            let Expression::Identifier(target) = expression else {
                return Err(Diagnostic::error(
                    "invalid assignment target: expected a plain identifier",
                    &assign,
                ));
            };
            let value = self.parse_expression()?;
            return Ok(Statement::Assignment { target, value });
        }

        Ok(Statement::Expression(expression))
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.advance(); // 'if'
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon, "':' after condition")?;
        self.expect(TokenKind::Newline, "a newline after ':'")?;
        let body = self.parse_block()?;

        let mut elif_clauses = Vec::new();
        while self.check(TokenKind::Elif) {
            self.advance();
            let condition = self.parse_expression()?;
            self.expect(TokenKind::Colon, "':' after condition")?;
            self.expect(TokenKind::Newline, "a newline after ':'")?;
            let body = self.parse_block()?;
            elif_clauses.push(ElifClause { condition, body });
        }

        let else_body = if self.check(TokenKind::Else) {
            self.advance();
            self.expect(TokenKind::Colon, "':' after 'else'")?;
            self.expect(TokenKind::Newline, "a newline after ':'")?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            body,
            elif_clauses,
            else_body,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.advance(); // 'while'
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Colon, "':' after condition")?;
        self.expect(TokenKind::Newline, "a newline after ':'")?;
        let body = self.parse_block()?;
        Ok(Statement::While { condition, body })
    }

    fn parse_function_def(&mut self) -> ParseResult<Statement> {
        self.advance(); // 'def'
        let name = self.expect(TokenKind::Identifier, "a function name after 'def'")?;
        self.expect(TokenKind::LParen, "'(' after function name")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                let param = self.expect(TokenKind::Identifier, "a parameter name")?;
                params.push(param.into_text());
                if !self.match_kind(TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen, "')' after parameters")?;
        self.expect(TokenKind::Colon, "':' after parameter list")?;
        self.expect(TokenKind::Newline, "a newline after ':'")?;
        let body = self.parse_block()?;

        Ok(Statement::FunctionDef {
            name: name.into_text(),
            params,
            body,
        })
    }

    fn parse_return(&mut self) -> ParseResult<Statement> {
        self.advance(); // 'return'
        let value = if matches!(self.peek().kind(), TokenKind::Newline | TokenKind::Eof) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        Ok(Statement::Return { value })
    }

    /// Parses an `Indent`-delimited statement block.
    fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        while self.match_kind(TokenKind::Newline) {}
        self.expect(TokenKind::Indent, "an indented block")?;

        let mut statements = Vec::new();
        loop {
            while self.match_kind(TokenKind::Newline) {}
            if matches!(self.peek().kind(), TokenKind::Dedent | TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::Dedent, "the end of the indented block")?;
        Ok(statements)
    }

    // === Expressions, lowest precedence first ===

    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_and()?;
        while self.match_kind(TokenKind::Or) {
            let right = self.parse_and()?;
            left = Expression::binary(left, BinaryOp::Or, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_not()?;
        while self.match_kind(TokenKind::And) {
            let right = self.parse_not()?;
            left = Expression::binary(left, BinaryOp::And, right);
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> ParseResult<Expression> {
        if self.match_kind(TokenKind::Not) {
            let operand = self.parse_not()?;
            return Ok(Expression::unary(UnaryOp::Not, operand));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_additive()?;
        loop {
            let operator = match self.peek().kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => break,
            };
            self.advance();
            let right = self.parse_additive()?;
            left = Expression::binary(left, operator, right);
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let operator = match self.peek().kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expression::binary(left, operator, right);
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;
        loop {
            let operator = match self.peek().kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.parse_unary()?;
            left = Expression::binary(left, operator, right);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let operator = match self.peek().kind() {
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Plus => UnaryOp::Pos,
            _ => return self.parse_primary(),
        };
        self.advance();
        let operand = self.parse_unary()?;
        Ok(Expression::unary(operator, operand))
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.peek().kind() {
            TokenKind::Number => {
                let token = self.advance();
                let value: f64 = token.text().parse().map_err(|_| {
                    Diagnostic::error(format!("invalid number literal '{}'", token.text()), &token)
                })?;
                Ok(Expression::Number(value))
            }
            TokenKind::String => {
                let token = self.advance();
                // The lexer keeps the delimiters; strip them here.
                let text = token.text();
                let inner = &text[1..text.len() - 1];
                Ok(Expression::String(inner.into()))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expression::Boolean(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expression::Boolean(false))
            }
            TokenKind::None => {
                self.advance();
                Ok(Expression::None)
            }
            TokenKind::Identifier => {
                let name = self.advance();
                if self.match_kind(TokenKind::LParen) {
                    let arguments = self.parse_arguments()?;
                    self.expect(TokenKind::RParen, "')' after arguments")?;
                    return Ok(Expression::Call {
                        callee: name.into_text(),
                        arguments,
                    });
                }
                Ok(Expression::Identifier(name.into_text()))
            }
            // `print` is a keyword that parses as a built-in call.
            TokenKind::Print => {
                self.advance();
                self.expect(TokenKind::LParen, "'(' after 'print'")?;
                let arguments = self.parse_arguments()?;
                self.expect(TokenKind::RParen, "')' after arguments")?;
                Ok(Expression::Call {
                    callee: "print".into(),
                    arguments,
                })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen, "')' to close the parenthesized expression")?;
                Ok(inner)
            }
            _ => Err(Diagnostic::error(
                format!("expected an expression, found {}", self.peek()),
                self.peek(),
            )),
        }
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_expression()?);
            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }
        Ok(arguments)
    }

    // === Token cursor ===

    /// Index of the next non-comment token at or after `index`.
    ///
    /// The final `Eof` token is never skipped past.
    fn skip_comments(&self, mut index: usize) -> usize {
        while index + 1 < self.tokens.len() && self.tokens[index].kind() == TokenKind::Comment {
            index += 1;
        }
        index
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.skip_comments(self.current)]
    }

    /// Consumes and returns the next non-comment token. At end of input,
    /// returns the `Eof` token without moving past it.
    fn advance(&mut self) -> Token {
        self.current = self.skip_comments(self.current);
        let token = self.tokens[self.current].clone();
        if token.kind() != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind() == kind
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        Err(Diagnostic::error(
            format!("expected {what}, found {}", self.peek()),
            self.peek(),
        ))
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind() == TokenKind::Eof
    }

    /// Discards tokens through the next statement boundary.
    fn synchronize(&mut self) {
        while !matches!(self.peek().kind(), TokenKind::Newline | TokenKind::Eof) {
            self.advance();
        }
        self.match_kind(TokenKind::Newline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::tokenize;

    /// Parses source expecting no diagnostics.
    fn parse_ok(source: &str) -> Program {
        let tokens = tokenize(source).expect("tokenize should succeed");
        let (program, diagnostics) = parse(tokens);
        assert!(
            diagnostics.is_empty(),
            "unexpected diagnostics: {diagnostics:?}"
        );
        program
    }

    /// Parses source expecting at least one diagnostic.
    fn parse_err(source: &str) -> (Program, Vec<Diagnostic>) {
        let tokens = tokenize(source).expect("tokenize should succeed");
        let (program, diagnostics) = parse(tokens);
        assert!(!diagnostics.is_empty(), "expected diagnostics");
        (program, diagnostics)
    }

    #[test]
    fn empty_source_is_empty_program() {
        let program = parse_ok("");
        assert!(program.statements.is_empty());
    }

    #[test]
    fn simple_assignment() {
        let program = parse_ok("x = 10\n");
        assert_eq!(program.statements.len(), 1);
        let Statement::Assignment { target, value } = &program.statements[0] else {
            panic!("expected assignment");
        };
        assert_eq!(target, "x");
        assert_eq!(*value, Expression::Number(10.0));
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let program = parse_ok("x = 2 + 3 * 4\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        assert_eq!(
            *value,
            Expression::binary(
                Expression::Number(2.0),
                BinaryOp::Add,
                Expression::binary(Expression::Number(3.0), BinaryOp::Mul, Expression::Number(4.0)),
            )
        );
    }

    #[test]
    fn comparison_binds_looser_than_arithmetic() {
        let program = parse_ok("x = 1 + 2 < 3 * 4\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary { operator, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::Lt);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let program = parse_ok("x = a or b and c\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary { operator, right, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::Or);
        let Expression::Binary { operator, .. } = right.as_ref() else {
            panic!("expected binary rhs");
        };
        assert_eq!(*operator, BinaryOp::And);
    }

    #[test]
    fn not_is_self_recursive() {
        let program = parse_ok("x = not not a\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Unary { operator, operand } = value else {
            panic!("expected unary expression");
        };
        assert_eq!(*operator, UnaryOp::Not);
        assert!(matches!(
            operand.as_ref(),
            Expression::Unary {
                operator: UnaryOp::Not,
                ..
            }
        ));
    }

    #[test]
    fn unary_minus_and_plus() {
        let program = parse_ok("x = -a + +b\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary { left, right, .. } = value else {
            panic!("expected binary expression");
        };
        assert!(matches!(
            left.as_ref(),
            Expression::Unary {
                operator: UnaryOp::Neg,
                ..
            }
        ));
        assert!(matches!(
            right.as_ref(),
            Expression::Unary {
                operator: UnaryOp::Pos,
                ..
            }
        ));
    }

    #[test]
    fn parentheses_override_precedence() {
        let program = parse_ok("x = (2 + 3) * 4\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary { operator, left, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::Mul);
        assert!(matches!(
            left.as_ref(),
            Expression::Binary {
                operator: BinaryOp::Add,
                ..
            }
        ));
    }

    #[test]
    fn comparison_is_left_associative() {
        let program = parse_ok("x = a < b < c\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        let Expression::Binary { left, operator, .. } = value else {
            panic!("expected binary expression");
        };
        assert_eq!(*operator, BinaryOp::Lt);
        assert!(matches!(
            left.as_ref(),
            Expression::Binary {
                operator: BinaryOp::Lt,
                ..
            }
        ));
    }

    #[test]
    fn literals() {
        let program = parse_ok("x = True\ny = False\nz = None\ns = 'hi'\n");
        let values: Vec<_> = program
            .statements
            .iter()
            .map(|s| {
                let Statement::Assignment { value, .. } = s else {
                    panic!("expected assignment");
                };
                value.clone()
            })
            .collect();
        assert_eq!(values[0], Expression::Boolean(true));
        assert_eq!(values[1], Expression::Boolean(false));
        assert_eq!(values[2], Expression::None);
        assert_eq!(values[3], Expression::String("hi".into()));
    }

    #[test]
    fn string_literal_is_stripped_of_quotes() {
        let program = parse_ok("x = \"hello\"\n");
        let Statement::Assignment { value, .. } = &program.statements[0] else {
            panic!("expected assignment");
        };
        assert_eq!(*value, Expression::String("hello".into()));
    }

    #[test]
    fn if_elif_else() {
        let program = parse_ok("if a:\n    x = 1\nelif b:\n    x = 2\nelse:\n    x = 3\n");
        assert_eq!(program.statements.len(), 1);
        let Statement::If {
            body,
            elif_clauses,
            else_body,
            ..
        } = &program.statements[0]
        else {
            panic!("expected if statement");
        };
        assert_eq!(body.len(), 1);
        assert_eq!(elif_clauses.len(), 1);
        assert_eq!(else_body.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn if_without_else() {
        let program = parse_ok("if a:\n    x = 1\n");
        let Statement::If {
            elif_clauses,
            else_body,
            ..
        } = &program.statements[0]
        else {
            panic!("expected if statement");
        };
        assert!(elif_clauses.is_empty());
        assert!(else_body.is_none());
    }

    #[test]
    fn nested_blocks() {
        let program = parse_ok("while a:\n    if b:\n        x = 1\n    y = 2\n");
        let Statement::While { body, .. } = &program.statements[0] else {
            panic!("expected while statement");
        };
        assert_eq!(body.len(), 2);
        assert!(matches!(body[0], Statement::If { .. }));
        assert!(matches!(body[1], Statement::Assignment { .. }));
    }

    #[test]
    fn function_def_with_params() {
        let program = parse_ok("def add(a, b):\n    return a + b\n");
        let Statement::FunctionDef { name, params, body } = &program.statements[0] else {
            panic!("expected function definition");
        };
        assert_eq!(name, "add");
        assert_eq!(params.as_slice(), ["a", "b"]);
        assert_eq!(body.len(), 1);
        assert!(matches!(body[0], Statement::Return { value: Some(_) }));
    }

    #[test]
    fn function_def_without_params() {
        let program = parse_ok("def main():\n    return\n");
        let Statement::FunctionDef { params, body, .. } = &program.statements[0] else {
            panic!("expected function definition");
        };
        assert!(params.is_empty());
        assert!(matches!(body[0], Statement::Return { value: None }));
    }

    #[test]
    fn call_expression() {
        let program = parse_ok("f(1, 2 + 3)\n");
        let Statement::Expression(Expression::Call { callee, arguments }) = &program.statements[0]
        else {
            panic!("expected call statement");
        };
        assert_eq!(callee, "f");
        assert_eq!(arguments.len(), 2);
        assert_eq!(arguments[0], Expression::Number(1.0));
        assert!(matches!(arguments[1], Expression::Binary { .. }));
    }

    #[test]
    fn call_with_no_arguments() {
        let program = parse_ok("f()\n");
        let Statement::Expression(Expression::Call { arguments, .. }) = &program.statements[0]
        else {
            panic!("expected call statement");
        };
        assert!(arguments.is_empty());
    }

    #[test]
    fn print_is_a_builtin_call() {
        let program = parse_ok("print(1, 2 + 3)\n");
        let Statement::Expression(Expression::Call { callee, arguments }) = &program.statements[0]
        else {
            panic!("expected call statement");
        };
        assert_eq!(callee, "print");
        assert_eq!(arguments.len(), 2);
    }

    #[test]
    fn print_requires_parentheses() {
        let (_, diagnostics) = parse_err("print 1\n");
        assert!(diagnostics[0].message.contains("'(' after 'print'"));
    }

    #[test]
    fn recovery_continues_after_bad_statement() {
        let (program, diagnostics) = parse_err("1 +\ny = 2\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(program.statements.len(), 1);
        let Statement::Assignment { target, .. } = &program.statements[0] else {
            panic!("expected recovered assignment");
        };
        assert_eq!(target, "y");
    }

    #[test]
    fn each_bad_statement_gets_its_own_diagnostic() {
        let (program, diagnostics) = parse_err("1 +\n2 *\nz = 3\n");
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[1].line, 2);
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn invalid_assignment_target() {
        let (_, diagnostics) = parse_err("f(x) = 1\n");
        assert!(diagnostics[0].message.contains("invalid assignment target"));
    }

    #[test]
    fn missing_colon_is_reported() {
        let (_, diagnostics) = parse_err("if x\n    y = 1\n");
        assert!(diagnostics[0].message.contains("':' after condition"));
    }

    #[test]
    fn trailing_tokens_after_statement() {
        let (program, diagnostics) = parse_err("x = 1 1\n");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("expected a newline"));
        // The statement before the junk is kept.
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn comments_are_invisible_to_the_grammar() {
        let program = parse_ok("# header\nx = 1 # trailing\n# footer\n");
        assert_eq!(program.statements.len(), 1);
        assert!(matches!(program.statements[0], Statement::Assignment { .. }));
    }

    #[test]
    fn diagnostic_carries_location() {
        let (_, diagnostics) = parse_err("x = +\n");
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].to_string().starts_with("parse error at line 1"));
    }

    #[test]
    fn parse_tolerates_missing_eof() {
        let (program, diagnostics) = parse(Vec::new());
        assert!(program.statements.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn mismatch_token_is_a_parse_error_not_a_panic() {
        let (_, diagnostics) = parse_err("x = ?\n");
        assert!(diagnostics[0].message.contains("unrecognized character"));
    }
}
