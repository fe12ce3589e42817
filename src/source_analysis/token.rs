// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Pyrite lexical analysis.
//!
//! # Token Structure
//!
//! Each token consists of:
//! - A [`TokenKind`] from a closed enumeration of syntactic elements
//! - The matched source text (empty for synthesized structural tokens)
//! - A 1-based line and 0-based column for editor consumers
//! - A byte [`Span`] into the source snapshot
//!
//! # Structural Tokens
//!
//! Pyrite is indentation-delimited, so the lexer synthesizes
//! [`TokenKind::Indent`] and [`TokenKind::Dedent`] tokens from whitespace
//! width, and emits one [`TokenKind::Newline`] per non-blank source line.
//! Highlighting consumers are expected to ignore structural kinds when
//! assigning colours.

use ecow::EcoString;

use super::Span;

/// The kind of token, not including source text or location.
///
/// This is a closed set: every keyword and operator gets its own variant,
/// which keeps the parser free of string comparisons and lets the compiler
/// check match exhaustiveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Literals and names ===
    /// An identifier: `foo`, `my_var`, `x1`
    Identifier,
    /// A numeric literal: `42`, `3.14`, `.5`
    Number,
    /// A string literal, delimiters included: `"hello"`, `'hi'`
    String,

    // === Keywords ===
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `def`
    Def,
    /// `return`
    Return,
    /// `True`
    True,
    /// `False`
    False,
    /// `None`
    None,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,

    // === Operators and punctuation ===
    /// `==`
    EqEq,
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
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `:`
    Colon,
    /// `,`
    Comma,

    // === Structural ===
    /// End of a non-blank source line
    Newline,
    /// Start of an indented block (synthesized)
    Indent,
    /// End of an indented block (synthesized)
    Dedent,
    /// A `#` comment running to the end of the line
    Comment,
    /// End of input
    Eof,
    /// A single unrecognized character (lexical error recovery)
    Mismatch,
}

/// Looks up the keyword kind for an identifier, if it is one.
///
/// This is the single, static keyword table: matching is exact and
/// case-sensitive, so `If` or `TRUE` are plain identifiers.
#[must_use]
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    match text {
        "if" => Some(TokenKind::If),
        "elif" => Some(TokenKind::Elif),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "def" => Some(TokenKind::Def),
        "return" => Some(TokenKind::Return),
        "True" => Some(TokenKind::True),
        "False" => Some(TokenKind::False),
        "None" => Some(TokenKind::None),
        "print" => Some(TokenKind::Print),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "not" => Some(TokenKind::Not),
        _ => Option::None,
    }
}

impl TokenKind {
    /// Returns `true` if this kind is a keyword.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If
                | Self::Elif
                | Self::Else
                | Self::While
                | Self::Def
                | Self::Return
                | Self::True
                | Self::False
                | Self::None
                | Self::Print
                | Self::And
                | Self::Or
                | Self::Not
        )
    }

    /// Returns `true` if this kind is an operator or punctuation.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            Self::EqEq
                | Self::NotEq
                | Self::Lt
                | Self::Gt
                | Self::LtEq
                | Self::GtEq
                | Self::Assign
                | Self::Plus
                | Self::Minus
                | Self::Star
                | Self::Slash
                | Self::Percent
                | Self::LParen
                | Self::RParen
                | Self::Colon
                | Self::Comma
        )
    }

    /// Returns `true` if this kind is synthesized structure rather than
    /// visible source text (`Newline`, `Indent`, `Dedent`, `Eof`).
    ///
    /// Highlighting consumers skip these when assigning colours.
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(self, Self::Newline | Self::Indent | Self::Dedent | Self::Eof)
    }

    /// Returns `true` if this is the end-of-input marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::If => "'if'",
            Self::Elif => "'elif'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Def => "'def'",
            Self::Return => "'return'",
            Self::True => "'True'",
            Self::False => "'False'",
            Self::None => "'None'",
            Self::Print => "'print'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Not => "'not'",
            Self::EqEq => "'=='",
            Self::NotEq => "'!='",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::LtEq => "'<='",
            Self::GtEq => "'>='",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Newline => "<newline>",
            Self::Indent => "<indent>",
            Self::Dedent => "<dedent>",
            Self::Comment => "<comment>",
            Self::Eof => "<end of file>",
            Self::Mismatch => "<unrecognized>",
        };
        f.write_str(text)
    }
}

/// A token with its matched text and source location.
///
/// Tokens are immutable once created. The `line` is 1-based and the
/// `column` is 0-based, matching what editor gutters and carets expect.
///
/// # Examples
///
/// ```
/// use pyrite_core::source_analysis::{Span, Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "foo".into(), 1, 0, Span::new(0, 3));
/// assert_eq!(token.kind(), TokenKind::Identifier);
/// assert_eq!(token.text(), "foo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: EcoString,
    line: u32,
    column: u32,
    span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: EcoString, line: u32, column: u32, span: Span) -> Self {
        Self {
            kind,
            text,
            line,
            column,
            span,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the matched source text.
    ///
    /// Structural tokens (`Indent`, `Dedent`, `Eof`) have empty text;
    /// string tokens keep their quote delimiters.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the token and returns its text.
    #[must_use]
    pub fn into_text(self) -> EcoString {
        self.text
    }

    /// Returns the 1-based source line.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 0-based source column.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the byte span of this token in the source snapshot.
    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number '{}'", self.text),
            TokenKind::String => write!(f, "string {}", self.text),
            TokenKind::Mismatch => write!(f, "unrecognized character '{}'", self.text),
            _ => self.kind.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_table_is_exact_and_case_sensitive() {
        assert_eq!(keyword_kind("if"), Some(TokenKind::If));
        assert_eq!(keyword_kind("elif"), Some(TokenKind::Elif));
        assert_eq!(keyword_kind("True"), Some(TokenKind::True));
        assert_eq!(keyword_kind("None"), Some(TokenKind::None));

        assert_eq!(keyword_kind("If"), Option::None);
        assert_eq!(keyword_kind("true"), Option::None);
        assert_eq!(keyword_kind("iff"), Option::None);
        assert_eq!(keyword_kind(""), Option::None);
    }

    #[test]
    fn token_kind_predicates() {
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());

        assert!(TokenKind::EqEq.is_operator());
        assert!(TokenKind::Comma.is_operator());
        assert!(!TokenKind::Number.is_operator());

        assert!(TokenKind::Indent.is_structural());
        assert!(TokenKind::Newline.is_structural());
        assert!(!TokenKind::Comment.is_structural());

        assert!(TokenKind::Eof.is_eof());
        assert!(!TokenKind::Dedent.is_eof());
    }

    #[test]
    fn token_kind_display() {
        assert_eq!(TokenKind::Identifier.to_string(), "identifier");
        assert_eq!(TokenKind::If.to_string(), "'if'");
        assert_eq!(TokenKind::EqEq.to_string(), "'=='");
        assert_eq!(TokenKind::Newline.to_string(), "<newline>");
        assert_eq!(TokenKind::Eof.to_string(), "<end of file>");
    }

    #[test]
    fn token_accessors() {
        let token = Token::new(TokenKind::Number, "42".into(), 3, 8, Span::new(20, 22));
        assert_eq!(token.kind(), TokenKind::Number);
        assert_eq!(token.text(), "42");
        assert_eq!(token.line(), 3);
        assert_eq!(token.column(), 8);
        assert_eq!(token.span(), Span::new(20, 22));
    }

    #[test]
    fn token_display_includes_text() {
        let token = Token::new(TokenKind::Identifier, "foo".into(), 1, 0, Span::new(0, 3));
        assert_eq!(token.to_string(), "identifier 'foo'");

        let token = Token::new(TokenKind::Colon, ":".into(), 1, 0, Span::new(0, 1));
        assert_eq!(token.to_string(), "':'");
    }
}
