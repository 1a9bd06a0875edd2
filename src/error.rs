//! Pattern error taxonomy
//!
//!     Every failure in the scan/parse/generate pipeline surfaces as a [`PatternError`].
//!     The variants form a closed set: scan failures (balance and class-nesting problems
//!     detected while classifying tokens), parse failures (unsupported constructs and
//!     malformed bodies detected by the sub-parsers), and generation failures (structurally
//!     empty scopes asked to emit).
//!
//!     Lower layers raise plain variants. The top-level parse loop enriches the error exactly
//!     once by wrapping it in [`PatternError::At`], which carries the byte offset of the
//!     failing token and the slice of the pattern consumed up to that point. Generation
//!     errors are never wrapped; they propagate to the caller as raised.

use std::fmt;

/// All errors raised by the scan/parse/generate pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// A `)` was scanned with no `(` open.
    UnopenedGroup { position: usize },
    /// The scan finished with at least one `(` still open.
    UnclosedGroup,
    /// The scan finished inside a `[...]` class.
    UnclosedClass,
    /// A `[` was scanned while a class was already open.
    NestedClass { position: usize },
    /// A `]` was scanned while no class was open.
    ClassNotOpen { position: usize },
    /// The construct is recognized but deliberately outside the supported grammar.
    NotSupported { construct: String },
    /// A `{...}` closure body that cannot be read as `{n}` or `{n,m}`.
    MalformedQuantifier { reason: String },
    /// A quantifier with no preceding construct to bind to.
    DanglingQuantifier { position: usize },
    /// A `\x`/`\X` escape whose body is missing, unterminated, or not hex.
    InvalidEscape { reason: String },
    /// A character-class range whose end sorts below its start, e.g. `[z-a]`.
    RangeOutOfOrder { start: char, end: char },
    /// Group nesting exceeded the recursion guard.
    GroupTooDeep { limit: usize },
    /// A sequence/alternating scope with no children was asked to generate.
    EmptyScope,
    /// A literal scope with no literals was asked to generate.
    EmptyLiteral,
    /// An alternation scope with fewer than two children was asked to generate.
    TooFewAlternatives,
    /// A parse error enriched with its location and the input consumed so far.
    At {
        position: usize,
        consumed: String,
        source: Box<PatternError>,
    },
}

impl PatternError {
    /// Strips the [`PatternError::At`] context wrapper, if any.
    pub fn root_cause(&self) -> &PatternError {
        match self {
            PatternError::At { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::UnopenedGroup { position } => write!(
                f,
                "closing group at offset {} has no matching open",
                position
            ),
            PatternError::UnclosedGroup => {
                write!(f, "opening group has no matching close")
            }
            PatternError::UnclosedClass => {
                write!(f, "character class was opened but never closed")
            }
            PatternError::NestedClass { position } => write!(
                f,
                "cannot open a second character class at offset {} while the first remains open",
                position
            ),
            PatternError::ClassNotOpen { position } => write!(
                f,
                "cannot close a character class at offset {} while none is open",
                position
            ),
            PatternError::NotSupported { construct } => {
                write!(f, "{} are not supported", construct)
            }
            PatternError::MalformedQuantifier { reason } => {
                write!(f, "malformed quantifier: {}", reason)
            }
            PatternError::DanglingQuantifier { position } => write!(
                f,
                "quantifier at offset {} has nothing to repeat",
                position
            ),
            PatternError::InvalidEscape { reason } => {
                write!(f, "invalid escape: {}", reason)
            }
            PatternError::RangeOutOfOrder { start, end } => write!(
                f,
                "character range {}-{} is out of order",
                start, end
            ),
            PatternError::GroupTooDeep { limit } => {
                write!(f, "group nesting exceeds the supported depth of {}", limit)
            }
            PatternError::EmptyScope => {
                write!(f, "no children to call, must be at least one")
            }
            PatternError::EmptyLiteral => {
                write!(f, "no literals to choose from")
            }
            PatternError::TooFewAlternatives => {
                write!(f, "no values to alternate over or only a single value")
            }
            PatternError::At {
                position,
                consumed,
                source,
            } => write!(
                f,
                "error at offset {} after parsing \"{}\": {}",
                position, consumed, source
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::At { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<PatternError> for String {
    fn from(err: PatternError) -> Self {
        err.to_string()
    }
}
