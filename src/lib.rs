//! regen — pattern-driven random string generation
//!
//!     regen parses a restricted regular-expression grammar and generates random
//!     strings that match it: the inverse of regex matching. The pipeline is
//!
//!         pattern string → raw tokenization → classification → Parser → Scope tree
//!             → generate(buffer, random source) → output string
//!
//!     Tokenization is split in two stages (see [token] and [lexing]): a context-free
//!     logos pass over single characters, then a stateful classification pass applying
//!     escape mode, character-class mode, and group depth. The [parsing] module drives
//!     recursive descent over the classified stream, delegating character classes,
//!     unicode escapes, shorthand classes, and quantifiers to sub-parser modules. The
//!     result is a [`Scope`] tree whose walk, parameterized by an injected
//!     [`RandomSource`], appends matching text to a caller-owned buffer.
//!
//! Supported grammar surface
//!
//!     Literals, arbitrarily nested `(...)` groups, `[...]` classes with ascending
//!     ranges and embedded `\xHH`/`\X{HEX}` escapes, the shorthands `. \d \D \w \W
//!     \s \S`, quantifiers `{n}` `{n,m}` `*` `+` `?`, and alternation `|`. Negated
//!     classes and `\p{...}` property classes are rejected rather than approximated;
//!     anchors are tokenized and ignored. Matching input against a pattern is out of
//!     scope entirely: this crate only generates.
//!
//! Determinism
//!
//!     Every random decision is a single inclusive `generate(min, max)` draw on the
//!     injected source, so a fixed seed and pattern reproduce the output byte for
//!     byte. `+` and `*` store an unbounded sentinel; cap it with
//!     [`Scope::cap_unbounded`] before generating unless enormous outputs are
//!     acceptable.
//!
//! Example
//!
//! ```rust,ignore
//! use regen::{generate_from_pattern, SimpleRandom};
//!
//! let mut rng = SimpleRandom::new(42);
//! let out = generate_from_pattern("([a-f]{2}-){3}", &mut rng)?;
//! ```

pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod random;
pub mod scope;
pub mod token;

pub use error::PatternError;
pub use formats::to_tree_string;
pub use lexing::Lexer;
pub use parsing::Parser;
pub use random::{MersenneTwister, RandomSource, SequenceRandom, SimpleRandom};
pub use scope::{Scope, ScopeKind, UNBOUNDED};
pub use token::{Token, TokenKind};

/// Scans and parses a pattern into its result scope.
///
/// This is the one-call entry point; construct [`Lexer`] and [`Parser`] directly to
/// inspect the token stream in between.
pub fn parse_pattern(pattern: &str) -> Result<Scope, PatternError> {
    let lexer = Lexer::scan(pattern)?;
    Parser::new(lexer).parse()
}

/// Parses `pattern` and generates one matching string with the supplied source.
pub fn generate_from_pattern(
    pattern: &str,
    rng: &mut dyn RandomSource,
) -> Result<String, PatternError> {
    let scope = parse_pattern(pattern)?;
    let mut buffer = String::new();
    scope.generate(&mut buffer, rng)?;
    Ok(buffer)
}
