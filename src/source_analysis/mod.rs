// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source analysis for Pyrite: lexing and parsing.
//!
//! The pipeline has two stages:
//!
//! 1. [`tokenize`] turns a source snapshot into a flat token stream,
//!    synthesizing `Indent`/`Dedent`/`Newline` structure from whitespace.
//! 2. [`parse`] turns that stream into a [`Program`](crate::ast::Program)
//!    plus a list of [`Diagnostic`]s, recovering at statement boundaries
//!    so one typo never blanks the whole file.
//!
//! Both stages are tolerant by design: the only fatal condition in the
//! entire pipeline is an inconsistent dedent, reported as [`IndentError`].

mod error;
mod lexer;
mod parser;
mod span;
mod token;

#[cfg(test)]
mod lexer_property_tests;

pub use error::IndentError;
pub use lexer::{Lexer, tokenize};
pub use parser::{Diagnostic, Severity, parse};
pub use span::Span;
pub use token::{Token, TokenKind, keyword_kind};
