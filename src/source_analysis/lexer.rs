// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Pyrite source code.
//!
//! This module converts source text into a stream of [`Token`]s, including
//! the synthesized `Indent`/`Dedent`/`Newline` structure derived from
//! whitespace. The lexer is hand-written for maximum control over error
//! recovery and IDE features.
//!
//! # Design Principles
//!
//! - **Error recovery**: unrecognized characters become
//!   [`TokenKind::Mismatch`] tokens; the stream keeps flowing while the
//!   user is typing invalid syntax.
//! - **One fatal condition**: an inconsistent dedent aborts the call with
//!   an [`IndentError`], because the parser cannot recover block structure
//!   from it safely.
//! - **Precise locations**: every token carries line, column, and byte span.
//!
//! # Per-Line Algorithm
//!
//! Lines containing only whitespace produce no tokens at all. Comment-only
//! lines produce a `Comment` and a `Newline` but never touch the indent
//! stack, so a comment cannot close an open block. All other lines first
//! reconcile their indentation width (spaces count 1, tabs count 4)
//! against the indent stack, then tokenize left to right, and finish with
//! exactly one `Newline`.
//!
//! # Example
//!
//! ```
//! use pyrite_core::source_analysis::{tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 1\n").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Number,
//!         TokenKind::Newline,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use super::error::IndentError;
use super::{Span, Token, TokenKind, keyword_kind};

/// The indentation stack: a strictly increasing sequence of widths with a
/// permanent base level of 0.
///
/// After any line is processed the top equals that line's indentation
/// width; at end of input every pushed level is popped again. Keeping the
/// invariant in one place makes the dedent-mismatch check a single guarded
/// comparison in [`Lexer::balance_indentation`].
#[derive(Debug)]
struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    fn new() -> Self {
        Self { levels: vec![0] }
    }

    /// Returns the current indentation width.
    fn top(&self) -> u32 {
        *self
            .levels
            .last()
            .expect("indent stack always holds the base level")
    }

    /// Pushes a deeper indentation level.
    fn push(&mut self, width: u32) {
        debug_assert!(width > self.top(), "indent stack must stay increasing");
        self.levels.push(width);
    }

    /// Pops the top level and returns it. The base level is never popped.
    fn pop(&mut self) -> u32 {
        debug_assert!(self.levels.len() > 1, "cannot pop the base level");
        self.levels
            .pop()
            .expect("indent stack always holds the base level")
    }
}

/// A lexer that tokenizes one complete Pyrite source snapshot.
///
/// Instances are cheap and single-use: create one per snapshot, call
/// [`Lexer::tokenize`], and discard it. No state crosses call boundaries.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// The source text being lexed.
    source: &'src str,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Open indentation levels.
    indents: IndentStack,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source snapshot.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            indents: IndentStack::new(),
        }
    }

    /// Tokenizes the whole snapshot.
    ///
    /// Always terminates. The only error is an inconsistent dedent; every
    /// other anomaly is represented in the token stream itself.
    ///
    /// # Errors
    ///
    /// Returns [`IndentError`] when a line dedents to a width that matches
    /// no enclosing indentation level.
    pub fn tokenize(mut self) -> Result<Vec<Token>, IndentError> {
        let source = self.source;
        let mut line_no = 0u32;
        let mut offset = 0usize;

        for raw_line in source.split_inclusive('\n') {
            line_no += 1;
            self.lex_line(raw_line, line_no, offset)?;
            offset += raw_line.len();
        }

        // Close every block still open at end of input.
        let last_line = line_no.max(1);
        let end = source.len();
        while self.indents.top() > 0 {
            self.indents.pop();
            self.push_token(TokenKind::Dedent, "", last_line, 0, end, end);
        }
        self.push_token(TokenKind::Eof, "", last_line, 0, end, end);

        Ok(self.tokens)
    }

    /// Lexes a single raw line (trailing newline included, if any).
    fn lex_line(&mut self, raw_line: &str, line: u32, line_start: usize) -> Result<(), IndentError> {
        let content = raw_line.strip_suffix('\n').unwrap_or(raw_line);
        let content = content.strip_suffix('\r').unwrap_or(content);

        // Blank lines produce nothing and leave the indent stack alone.
        if content.trim().is_empty() {
            return Ok(());
        }

        // Indentation width, computed once before any token matching.
        let mut width = 0u32;
        let mut body_start = content.len();
        for (index, c) in content.char_indices() {
            match c {
                ' ' => width += 1,
                '\t' => width += 4,
                _ => {
                    body_start = index;
                    break;
                }
            }
        }
        let body = &content[body_start..];

        // Comment-only lines never participate in indentation comparison.
        if body.starts_with('#') {
            self.push_token(
                TokenKind::Comment,
                body,
                line,
                width,
                line_start + body_start,
                line_start + content.len(),
            );
            self.push_newline(line, content, raw_line, line_start);
            return Ok(());
        }

        self.balance_indentation(width, line, line_start + body_start)?;
        self.lex_body(body, line, width, line_start + body_start);
        self.push_newline(line, content, raw_line, line_start);
        Ok(())
    }

    /// Reconciles a line's indentation width against the indent stack.
    fn balance_indentation(&mut self, width: u32, line: u32, at: usize) -> Result<(), IndentError> {
        if width > self.indents.top() {
            let previous = self.indents.top();
            self.indents.push(width);
            self.push_token(TokenKind::Indent, "", line, previous, at, at);
        } else if width < self.indents.top() {
            while width < self.indents.top() {
                let popped = self.indents.pop();
                self.push_token(TokenKind::Dedent, "", line, popped, at, at);
            }
            if width != self.indents.top() {
                return Err(IndentError::new(
                    line,
                    width,
                    self.indents.top(),
                    Span::from(at..at),
                ));
            }
        }
        Ok(())
    }

    /// Tokenizes the content of a line after its leading whitespace.
    ///
    /// Columns reproduce the original highlighter's convention: the
    /// indentation width (tabs counted as 4) plus the character offset
    /// within the remaining content.
    fn lex_body(&mut self, body: &str, line: u32, indent: u32, body_offset: usize) {
        let mut i = 0usize; // byte index into body
        let mut col = 0u32; // char offset into body

        while i < body.len() {
            let Some(c) = body[i..].chars().next() else {
                break;
            };
            let column = indent + col;
            let start = body_offset + i;

            match c {
                // Inter-token whitespace is consumed without a token.
                ' ' | '\t' => {
                    i += 1;
                    col += 1;
                }

                // Trailing comment: runs to the end of the line.
                '#' => {
                    let text = &body[i..];
                    self.push_token(
                        TokenKind::Comment,
                        text,
                        line,
                        column,
                        start,
                        body_offset + body.len(),
                    );
                    i = body.len();
                }

                // String literal: to the matching quote on the same line,
                // no escape processing. An unterminated quote is a
                // mismatch on the quote character alone.
                '"' | '\'' => match body[i + 1..].find(c) {
                    Some(relative) => {
                        let end = i + 1 + relative + 1;
                        let text = &body[i..end];
                        self.push_token(
                            TokenKind::String,
                            text,
                            line,
                            column,
                            start,
                            body_offset + end,
                        );
                        col += text.chars().count() as u32;
                        i = end;
                    }
                    None => {
                        self.push_token(
                            TokenKind::Mismatch,
                            &body[i..=i],
                            line,
                            column,
                            start,
                            start + 1,
                        );
                        i += 1;
                        col += 1;
                    }
                },

                '0'..='9' => {
                    let end = scan_number(body, i);
                    let text = &body[i..end];
                    self.push_token(TokenKind::Number, text, line, column, start, body_offset + end);
                    col += (end - i) as u32;
                    i = end;
                }

                // `.5` style numeric literal; a lone `.` is a mismatch.
                '.' => {
                    if body[i + 1..].starts_with(|ch: char| ch.is_ascii_digit()) {
                        let mut end = i + 1;
                        while body[end..].starts_with(|ch: char| ch.is_ascii_digit()) {
                            end += 1;
                        }
                        let text = &body[i..end];
                        self.push_token(
                            TokenKind::Number,
                            text,
                            line,
                            column,
                            start,
                            body_offset + end,
                        );
                        col += (end - i) as u32;
                        i = end;
                    } else {
                        self.push_token(
                            TokenKind::Mismatch,
                            &body[i..=i],
                            line,
                            column,
                            start,
                            start + 1,
                        );
                        i += 1;
                        col += 1;
                    }
                }

                'a'..='z' | 'A'..='Z' | '_' => {
                    let mut end = i + 1;
                    while body[end..]
                        .starts_with(|ch: char| ch.is_ascii_alphanumeric() || ch == '_')
                    {
                        end += 1;
                    }
                    let text = &body[i..end];
                    let kind = keyword_kind(text).unwrap_or(TokenKind::Identifier);
                    self.push_token(kind, text, line, column, start, body_offset + end);
                    col += (end - i) as u32;
                    i = end;
                }

                // Multi-character operators are matched before their
                // single-character prefixes.
                '=' | '!' | '<' | '>' => {
                    let next = body[i + 1..].chars().next();
                    let (kind, len) = match (c, next) {
                        ('=', Some('=')) => (TokenKind::EqEq, 2),
                        ('!', Some('=')) => (TokenKind::NotEq, 2),
                        ('<', Some('=')) => (TokenKind::LtEq, 2),
                        ('>', Some('=')) => (TokenKind::GtEq, 2),
                        ('=', _) => (TokenKind::Assign, 1),
                        ('<', _) => (TokenKind::Lt, 1),
                        ('>', _) => (TokenKind::Gt, 1),
                        // `!` on its own is not an operator in Pyrite.
                        _ => (TokenKind::Mismatch, 1),
                    };
                    let text = &body[i..i + len];
                    self.push_token(kind, text, line, column, start, start + len);
                    col += len as u32;
                    i += len;
                }

                '+' | '-' | '*' | '/' | '%' | '(' | ')' | ':' | ',' => {
                    let kind = match c {
                        '+' => TokenKind::Plus,
                        '-' => TokenKind::Minus,
                        '*' => TokenKind::Star,
                        '/' => TokenKind::Slash,
                        '%' => TokenKind::Percent,
                        '(' => TokenKind::LParen,
                        ')' => TokenKind::RParen,
                        ':' => TokenKind::Colon,
                        _ => TokenKind::Comma,
                    };
                    self.push_token(kind, &body[i..=i], line, column, start, start + 1);
                    i += 1;
                    col += 1;
                }

                // Anything else is a single-character mismatch; the stream
                // keeps flowing so highlighting can flag it.
                _ => {
                    let len = c.len_utf8();
                    self.push_token(
                        TokenKind::Mismatch,
                        &body[i..i + len],
                        line,
                        column,
                        start,
                        start + len,
                    );
                    i += len;
                    col += 1;
                }
            }
        }
    }

    /// Emits the single `Newline` token that ends every non-blank line.
    fn push_newline(&mut self, line: u32, content: &str, raw_line: &str, line_start: usize) {
        let column = content.chars().count() as u32;
        let start = line_start + content.len();
        let end = line_start + raw_line.len();
        self.push_token(TokenKind::Newline, "\n", line, column, start, end);
    }

    fn push_token(
        &mut self,
        kind: TokenKind,
        text: &str,
        line: u32,
        column: u32,
        start: usize,
        end: usize,
    ) {
        self.tokens
            .push(Token::new(kind, text.into(), line, column, Span::from(start..end)));
    }
}

/// Scans a numeric literal starting at a digit: `digits`, `digits.`, or
/// `digits.digits`.
fn scan_number(body: &str, start: usize) -> usize {
    let mut end = start;
    while body[end..].starts_with(|ch: char| ch.is_ascii_digit()) {
        end += 1;
    }
    if body[end..].starts_with('.') {
        end += 1;
        while body[end..].starts_with(|ch: char| ch.is_ascii_digit()) {
            end += 1;
        }
    }
    end
}

/// Convenience function to tokenize a complete source snapshot.
///
/// # Errors
///
/// Returns [`IndentError`] when a line dedents to a width that matches no
/// enclosing indentation level.
pub fn tokenize(source: &str) -> Result<Vec<Token>, IndentError> {
    Lexer::new(source).tokenize()
}
