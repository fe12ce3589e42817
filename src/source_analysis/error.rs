// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fatal lexical errors.
//!
//! Most lexical anomalies are recovered locally: an unrecognized character
//! becomes a [`TokenKind::Mismatch`](super::TokenKind::Mismatch) token and
//! tokenization continues. The one exception is an inconsistent dedent,
//! which leaves the block structure unreconstructable, so it aborts the
//! tokenize call. Errors integrate with [`miette`] for editor diagnostics.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use super::Span;

/// An inconsistent dedent encountered while tracking indentation.
///
/// Raised when a line dedents to a width that matches no enclosing
/// indentation level, e.g. a width-2 line directly after a width-4 block
/// with no width-2 ancestor on the indent stack.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error(
    "inconsistent indentation on line {line}: dedent to width {found} matches no enclosing block (expected width {expected})"
)]
#[diagnostic()]
pub struct IndentError {
    /// The 1-based line where the mismatch occurred.
    pub line: u32,
    /// The indentation width found on the offending line.
    pub found: u32,
    /// The nearest surviving indentation level.
    pub expected: u32,
    /// The source location of the offending line's first token.
    #[label("this line dedents past every open block")]
    pub span: Span,
}

impl IndentError {
    /// Creates a new indentation error.
    #[must_use]
    pub fn new(line: u32, found: u32, expected: u32, span: Span) -> Self {
        Self {
            line,
            found,
            expected,
            span,
        }
    }
}
