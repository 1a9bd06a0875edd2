//! Token definitions for the pattern grammar
//!
//!     Tokenization happens in two stages. This module defines the raw tokens produced
//!     by the logos lexer, which classifies single characters without any context, and
//!     the final [`Token`]/[`TokenKind`] pair produced by the classification
//!     transformation, which applies escape mode, character-class mode, and group depth.
//!
//!     Keeping the logos stage context-free means the derive macro handles all character
//!     dispatch, and every mode-dependent rule lives in one transformation step. See
//!     [classification](crate::lexing::classification).

use logos::Logos;
use serde::Serialize;
use std::ops::Range;

/// Raw single-character tokens over the pattern grammar surface.
///
/// These carry no payload; the character value is recovered from the byte span.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[token("\\")]
    Backslash,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token("-")]
    Dash,
    #[token("^")]
    Caret,

    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("*")]
    Star,
    #[token("+")]
    Plus,
    #[token("?")]
    Question,

    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,
    #[token("$")]
    Dollar,

    #[regex(r"[0-9]")]
    Digit,

    // Catch-all for every character without a dedicated token above.
    #[regex(r"[^\\()\[\]^$.|*+?{}0-9-]")]
    Text,
}

/// Classified token kinds, the closed enumeration the parser dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    LiteralChar,
    LiteralNumeric,
    GroupOpen,
    GroupClose,
    SetOpen,
    SetClose,
    SetRange,
    SetNegated,
    QuantOpen,
    QuantClose,
    Star,
    Plus,
    Question,
    Escape,
    ChoiceBar,
    Dot,
    AnchorStart,
    AnchorEnd,
    ShortDigit,
    ShortNotDigit,
    ShortWord,
    ShortNotWord,
    ShortSpace,
    ShortNotSpace,
    UnicodeHex,
    UnicodeBrace,
    PropertyClass,
    PropertyClassNegated,
}

/// A classified token: kind, character value, and byte offset into the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: char,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: char, position: usize) -> Self {
        Token {
            kind,
            value,
            position,
        }
    }
}

/// Runs the raw logos pass over the full source.
///
/// The catch-all regex covers every character the dedicated tokens do not, so the
/// derive-level error case cannot fire; it is folded into `Text` rather than surfaced.
pub fn tokenize(source: &str) -> Vec<(RawToken, Range<usize>)> {
    RawToken::lexer(source)
        .spanned()
        .map(|(token, span)| (token.unwrap_or(RawToken::Text), span))
        .collect()
}
