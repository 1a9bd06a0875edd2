//! Diagnostic output formats
//!
//!     One line per node, structure as two-space indentation. The point is quick
//!     scanning of a parsed tree from the command line: labels, repeat bounds, and
//!     either the child count or a (truncated) literal listing.
//!
//!     Example for `(foo|[a-c]{2,4})`:
//!
//!         result
//!           head
//!             group (alternating)
//!               head
//!                 literal 'f'
//!                 literal 'o'
//!                 literal 'o'
//!               head
//!                 class 2..4 "abc"
//!
//!     JSON output for tokens and trees comes straight from the serde derives on
//!     [`Token`](crate::token::Token) and [`Scope`]; nothing bespoke lives here.

use crate::scope::{Scope, ScopeKind, UNBOUNDED};
use std::fmt::Write;

const LITERAL_PREVIEW_CHARS: usize = 24;

/// Renders the scope tree as an indented one-line-per-node listing.
pub fn to_tree_string(scope: &Scope) -> String {
    let mut out = String::new();
    render(scope, 0, &mut out);
    out
}

fn render(scope: &Scope, level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
    out.push_str(scope.label());

    match scope.kind() {
        ScopeKind::Literal { literals } => {
            if literals.len() == 1 {
                let _ = write!(out, "{} '{}'", bounds(scope), literals[0]);
            } else {
                let preview: String = literals.iter().take(LITERAL_PREVIEW_CHARS).collect();
                let ellipsis = if literals.len() > LITERAL_PREVIEW_CHARS {
                    "…"
                } else {
                    ""
                };
                let _ = write!(out, "{} \"{}{}\"", bounds(scope), preview, ellipsis);
            }
            out.push('\n');
        }
        ScopeKind::Group { alternating, .. } => {
            let _ = write!(out, "{}", bounds(scope));
            if *alternating {
                out.push_str(" (alternating)");
            }
            out.push('\n');
            for child in scope.children() {
                render(child, level + 1, out);
            }
        }
        ScopeKind::Alternation { .. } => {
            let _ = write!(out, "{} (alternation)", bounds(scope));
            out.push('\n');
            for child in scope.children() {
                render(child, level + 1, out);
            }
        }
    }
}

fn bounds(scope: &Scope) -> String {
    if scope.min_occurrences() == 1 && scope.max_occurrences() == 1 {
        String::new()
    } else if scope.max_occurrences() == UNBOUNDED {
        format!(" {}..∞", scope.min_occurrences())
    } else {
        format!(" {}..{}", scope.min_occurrences(), scope.max_occurrences())
    }
}
