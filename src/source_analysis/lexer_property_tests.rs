// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the lexer.
//!
//! These verify structural invariants that must hold for any input, not
//! just the hand-picked cases in the unit tests.

use proptest::prelude::*;

use super::{TokenKind, tokenize};

proptest! {
    /// The lexer must never panic, whatever bytes arrive from the editor.
    #[test]
    fn tokenize_never_panics(source in "\\PC{0,500}") {
        let _ = tokenize(&source);
    }

    /// Every successful tokenization ends with exactly one Eof token.
    #[test]
    fn token_stream_ends_with_single_eof(source in "\\PC{0,500}") {
        if let Ok(tokens) = tokenize(&source) {
            let eofs = tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
            prop_assert_eq!(tokens.last().map(super::Token::kind), Some(TokenKind::Eof));
        }
    }

    /// Every Indent is matched by a Dedent before end of stream.
    #[test]
    fn indents_and_dedents_balance(source in "\\PC{0,500}") {
        if let Ok(tokens) = tokenize(&source) {
            let indents = tokens.iter().filter(|t| t.kind() == TokenKind::Indent).count();
            let dedents = tokens.iter().filter(|t| t.kind() == TokenKind::Dedent).count();
            prop_assert_eq!(indents, dedents);
        }
    }

    /// Lexing the same snapshot twice gives the same stream.
    #[test]
    fn tokenize_is_deterministic(source in "\\PC{0,300}") {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    /// Whitespace-only input never produces visible tokens.
    #[test]
    fn blank_input_is_only_eof(source in "[ \t\n]{0,200}") {
        let tokens = tokenize(&source).expect("blank input never dedents");
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind(), TokenKind::Eof);
    }

    /// Well-formed single-line fragments lex without any Mismatch tokens.
    #[test]
    fn clean_fragments_have_no_mismatch(
        name in "[a-z_][a-z0-9_]{0,8}",
        number in 0u32..100_000,
    ) {
        let source = format!("{name} = {number} + ({name} * 2)\n");
        let tokens = tokenize(&source).expect("flat line never dedents");
        prop_assert!(tokens.iter().all(|t| t.kind() != TokenKind::Mismatch));
    }

    /// Token spans never overlap and never run backwards.
    #[test]
    fn spans_are_ordered(source in "\\PC{0,300}") {
        if let Ok(tokens) = tokenize(&source) {
            for pair in tokens.windows(2) {
                prop_assert!(pair[0].span().start() <= pair[0].span().end());
                prop_assert!(pair[0].span().end() <= pair[1].span().end());
            }
        }
    }
}
