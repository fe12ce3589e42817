// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Pyrite analysis core.
//!
//! This crate contains the language analysis functionality:
//! - Lexical analysis (tokenization with indentation tracking)
//! - Parsing (AST construction with error recovery)
//! - AST traversal and rendering for diagnostics consumers
//!
//! The crate is designed as the core of an editor language service,
//! prioritising responsiveness on partially written input over strictness.

#![doc = include_str!("../README.md")]

pub mod ast;
pub mod ast_walker;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Program, Statement};
    pub use crate::source_analysis::{
        Diagnostic, Span, Token, TokenKind, parse, tokenize,
    };
}
