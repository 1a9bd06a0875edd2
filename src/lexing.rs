//! Lexer
//!
//!     Scanning a pattern runs two stages:
//!
//!         1. Raw tokenization using the logos lexer. See [tokenize](crate::token::tokenize).
//!            Every character maps to exactly one raw token with its byte span; no context
//!            is consulted.
//!
//!         2. Classification. See [classification]. A stateful pass over the raw stream
//!            applies escape mode, character-class mode, and group depth, producing the
//!            typed tokens the parser dispatches on. Balance violations (unclosed groups
//!            or classes, stray closers) are rejected here, before parsing starts.
//!
//!     The resulting [`Lexer`] is a cursor over the classified tokens: `move_next`
//!     advances and reports whether a token is available, `lookahead` is the token the
//!     cursor rests on, and `glimpse` peeks one token further without advancing. The
//!     lexer also retains the source so that error reporting can reconstruct the input
//!     consumed before a failure.

pub mod classification;

use crate::error::PatternError;
use crate::token::{tokenize, Token};

/// Cursor over the classified token stream of one pattern.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    consumed: usize,
}

impl Lexer {
    /// Scans the full pattern eagerly and validates group/class balance.
    pub fn scan(source: &str) -> Result<Self, PatternError> {
        let tokens = classification::classify(tokenize(source), source)?;
        Ok(Lexer {
            source: source.to_string(),
            tokens,
            consumed: 0,
        })
    }

    /// Advances the cursor. Returns false once the stream is exhausted.
    pub fn move_next(&mut self) -> bool {
        if self.consumed < self.tokens.len() {
            self.consumed += 1;
            true
        } else {
            false
        }
    }

    /// The token the cursor currently rests on, if any.
    pub fn lookahead(&self) -> Option<&Token> {
        self.consumed
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
    }

    /// One-token peek past the cursor; does not advance.
    pub fn glimpse(&self) -> Option<&Token> {
        self.tokens.get(self.consumed)
    }

    /// The full classified token stream.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The source prefix consumed up to `position` (a byte offset), used to show
    /// what was parsed before a failure.
    pub fn compress(&self, position: usize) -> &str {
        let end = position.min(self.source.len());
        &self.source[..end]
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }
}
