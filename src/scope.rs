//! Generator tree
//!
//!     Parsing produces a tree of [`Scope`] nodes, and generation walks it. Every node
//!     carries the repeat contract (`min_occurrences <= max_occurrences`, default 1/1)
//!     and one of three emission behaviors:
//!
//!         - Group: a container of children. Non-alternating groups emit every child in
//!           attachment order per repetition, which is how adjacent terms like `ab`
//!           concatenate. Alternating groups draw one child per repetition, which is how
//!           `|` branches become mutually exclusive.
//!         - Literal: an ordered set of characters; each repetition appends one of them.
//!         - Alternation: a standalone alternating container with a zero-based draw,
//!           for trees assembled by hand rather than by the parser.
//!
//!     Topology is fixed once parsing completes. Generation never mutates the tree; the
//!     only observable effects are appends to the caller's buffer and the advancement of
//!     the injected random source.
//!
//! Indexing conventions
//!
//!     The draw conventions differ per emission behavior and are part of the contract:
//!     alternating groups draw a one-based child index, literal scopes use index zero
//!     directly when they hold a single literal and a one-based draw otherwise (resolved
//!     through the one-based [`Scope::get_at`] accessor), and alternation scopes draw
//!     zero-based. All draws are single calls to `generate(min, max)` per repetition,
//!     and the repeat quota itself is a single draw per `generate` invocation.

use crate::error::PatternError;
use crate::random::RandomSource;
use serde::Serialize;

/// Sentinel for `+`/`*` maxima. Callers cap it with [`Scope::cap_unbounded`]
/// before generating.
pub const UNBOUNDED: u32 = u32::MAX;

/// Emission behavior of a scope node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScopeKind {
    Group {
        alternating: bool,
        children: Vec<Scope>,
    },
    Literal {
        literals: Vec<char>,
    },
    Alternation {
        children: Vec<Scope>,
    },
}

/// A repeatable, generatable node of the pattern tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scope {
    label: String,
    min_occurrences: u32,
    max_occurrences: u32,
    kind: ScopeKind,
}

impl Scope {
    pub fn group(label: &str) -> Self {
        Scope {
            label: label.to_string(),
            min_occurrences: 1,
            max_occurrences: 1,
            kind: ScopeKind::Group {
                alternating: false,
                children: Vec::new(),
            },
        }
    }

    pub fn literal(label: &str) -> Self {
        Scope {
            label: label.to_string(),
            min_occurrences: 1,
            max_occurrences: 1,
            kind: ScopeKind::Literal {
                literals: Vec::new(),
            },
        }
    }

    pub fn alternation(label: &str) -> Self {
        Scope {
            label: label.to_string(),
            min_occurrences: 1,
            max_occurrences: 1,
            kind: ScopeKind::Alternation {
                children: Vec::new(),
            },
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &ScopeKind {
        &self.kind
    }

    pub fn min_occurrences(&self) -> u32 {
        self.min_occurrences
    }

    pub fn max_occurrences(&self) -> u32 {
        self.max_occurrences
    }

    /// Sets the repeat contract. The maximum is lifted to the minimum when the
    /// two arrive inverted.
    pub fn set_occurrences(&mut self, min: u32, max: u32) {
        self.min_occurrences = min;
        self.max_occurrences = max.max(min);
    }

    /// Marks a group as alternating. Ignored for other kinds.
    pub fn set_alternating(&mut self, value: bool) {
        if let ScopeKind::Group { alternating, .. } = &mut self.kind {
            *alternating = value;
        }
    }

    pub fn is_alternating(&self) -> bool {
        matches!(
            self.kind,
            ScopeKind::Group {
                alternating: true,
                ..
            }
        )
    }

    /// Attaches a child. Ignored for literal scopes, which hold characters instead.
    pub fn attach(&mut self, child: Scope) {
        match &mut self.kind {
            ScopeKind::Group { children, .. } | ScopeKind::Alternation { children } => {
                children.push(child);
            }
            ScopeKind::Literal { .. } => {}
        }
    }

    pub fn children(&self) -> &[Scope] {
        match &self.kind {
            ScopeKind::Group { children, .. } | ScopeKind::Alternation { children } => children,
            ScopeKind::Literal { .. } => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn last_child_mut(&mut self) -> Option<&mut Scope> {
        match &mut self.kind {
            ScopeKind::Group { children, .. } | ScopeKind::Alternation { children } => {
                children.last_mut()
            }
            ScopeKind::Literal { .. } => None,
        }
    }

    /// Appends a literal character. Ignored for non-literal scopes.
    pub fn push_literal(&mut self, value: char) {
        if let ScopeKind::Literal { literals } = &mut self.kind {
            literals.push(value);
        }
    }

    pub fn literal_count(&self) -> usize {
        match &self.kind {
            ScopeKind::Literal { literals } => literals.len(),
            _ => 0,
        }
    }

    /// One-based positional access into the literal collection. Out-of-bounds
    /// positions (including zero) return `None`.
    pub fn get_at(&self, position: usize) -> Option<char> {
        match &self.kind {
            ScopeKind::Literal { literals } => {
                if position == 0 {
                    None
                } else {
                    literals.get(position - 1).copied()
                }
            }
            _ => None,
        }
    }

    /// Clamps every unbounded maximum in the tree to `cap`, never below the
    /// node's own minimum.
    pub fn cap_unbounded(&mut self, cap: u32) {
        if self.max_occurrences == UNBOUNDED {
            self.max_occurrences = cap.max(self.min_occurrences);
        }
        if let ScopeKind::Group { children, .. } | ScopeKind::Alternation { children } =
            &mut self.kind
        {
            for child in children {
                child.cap_unbounded(cap);
            }
        }
    }

    /// Walks the tree, appending generated text to `buffer`.
    pub fn generate(
        &self,
        buffer: &mut String,
        rng: &mut dyn RandomSource,
    ) -> Result<(), PatternError> {
        match &self.kind {
            ScopeKind::Group { children, .. } if children.is_empty() => {
                return Err(PatternError::EmptyScope);
            }
            ScopeKind::Literal { literals } if literals.is_empty() => {
                return Err(PatternError::EmptyLiteral);
            }
            ScopeKind::Alternation { children } if children.len() < 2 => {
                return Err(PatternError::TooFewAlternatives);
            }
            _ => {}
        }

        let quota = self.repeat_quota(rng);
        for _ in 0..quota {
            match &self.kind {
                ScopeKind::Group {
                    alternating,
                    children,
                } => {
                    if *alternating {
                        let index = rng.generate(1, children.len() as u64) as usize;
                        children[index - 1].generate(buffer, rng)?;
                    } else {
                        for child in children {
                            child.generate(buffer, rng)?;
                        }
                    }
                }
                ScopeKind::Literal { literals } => {
                    if literals.len() == 1 {
                        buffer.push(literals[0]);
                    } else {
                        let index = rng.generate(1, literals.len() as u64) as usize;
                        if let Some(value) = self.get_at(index) {
                            buffer.push(value);
                        }
                    }
                }
                ScopeKind::Alternation { children } => {
                    let index = rng.generate(0, children.len() as u64 - 1) as usize;
                    children[index].generate(buffer, rng)?;
                }
            }
        }
        Ok(())
    }

    /// One draw per `generate` call; fixed bounds skip the draw entirely.
    fn repeat_quota(&self, rng: &mut dyn RandomSource) -> u32 {
        if self.min_occurrences == self.max_occurrences {
            self.min_occurrences
        } else {
            rng.generate(u64::from(self.min_occurrences), u64::from(self.max_occurrences)) as u32
        }
    }
}
