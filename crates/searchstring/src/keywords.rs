//! Resolves the `NOT`, `AND` and `OR` keywords into modifiers on neighbouring terms.
//!
//! Keywords are recognized case-insensitively on unquoted terms without a prefix symbol.
//! They are removed from the sequence and act on their neighbours:
//!
//! - `NOT x` marks `x` as excluded. `NOT` as the last term is dropped with
//!   [`Diagnostic::TrailingNot`].
//! - `x AND y` marks both neighbours as required, `x OR y` as optional. Without a term on
//!   either side the keyword is dropped with [`Diagnostic::BoundaryMisuse`].
//!
//! A term that already carries a conflicting modifier keeps it and a
//! [`Diagnostic::Contradiction`] is recorded. The term to the right of a keyword is that
//! keyword's operand and is never itself treated as a keyword.

use tracing::trace;

use crate::{
    error::Diagnostic,
    term::{Symbol, Term},
};

/// A slot in the sequence being resolved.
struct Slot {
    /// The term occupying the slot.
    term: Term,
    /// Set once a keyword has been consumed from this slot.
    removed: bool,
}

/// Returns the keyword a term spells, if it is eligible to be one.
fn keyword_of(term: &Term) -> Option<Symbol> {
    if term.quoted || term.symbol.is_some() {
        return None;
    }
    [Symbol::Not, Symbol::And, Symbol::Or]
        .into_iter()
        .find(|symbol| term.text.eq_ignore_ascii_case(symbol.keyword()))
}

/// Applies `requested` to a term, refusing to change what `conflicts` says is protected.
fn assign(
    term: &mut Term,
    requested: Symbol,
    conflicts: impl Fn(Symbol) -> bool,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match term.symbol {
        Some(existing) if existing == requested => {}
        Some(existing) if conflicts(existing) => {
            diagnostics.push(Diagnostic::Contradiction {
                term: term.text.clone(),
                existing,
                requested,
                position: term.offset,
            });
        }
        _ => term.symbol = Some(requested),
    }
}

/// Resolves keywords in `terms`, returning the remaining terms in their original order.
pub fn resolve_keywords(terms: Vec<Term>, diagnostics: &mut Vec<Diagnostic>) -> Vec<Term> {
    let mut slots: Vec<Slot> = terms
        .into_iter()
        .map(|term| Slot {
            term,
            removed: false,
        })
        .collect();
    let len = slots.len();

    let mut i = 0;
    while i < len {
        let Some(keyword) = keyword_of(&slots[i].term) else {
            i += 1;
            continue;
        };
        slots[i].removed = true;
        let position = slots[i].term.offset;
        trace!(%keyword, position, "resolving keyword");

        if keyword == Symbol::Not {
            if i + 1 == len {
                diagnostics.push(Diagnostic::TrailingNot { position });
                break;
            }
            // Any modifier other than NOT conflicts with NOT.
            assign(&mut slots[i + 1].term, Symbol::Not, |_| true, diagnostics);
            i += 2;
            continue;
        }

        let has_left = i > 0 && !slots[i - 1].removed;
        if !has_left || i + 1 == len {
            diagnostics.push(Diagnostic::BoundaryMisuse { keyword, position });
            i += 1;
            continue;
        }

        let excluded = |existing: Symbol| existing == Symbol::Not;
        assign(&mut slots[i - 1].term, keyword, excluded, diagnostics);
        assign(&mut slots[i + 1].term, keyword, excluded, diagnostics);
        i += 2;
    }

    slots
        .into_iter()
        .filter(|slot| !slot.removed)
        .map(|slot| slot.term)
        .collect()
}
