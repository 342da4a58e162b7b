//! Applicability gates for chain stages.
//!
//! A gate is a plain function value, not a trait: configs stay `Copy`, and a
//! caller can hand any `fn(&Application) -> bool` to a stage without
//! implementing anything.

use crate::application::Application;

/// A pure check deciding whether a stage runs for a given record.
/// Evaluated once per stage per traversal, before the stage's own logic.
pub type Criteria = fn(&Application) -> bool;

/// The default gate: the stage runs for every record.
pub fn always_applicable(_: &Application) -> bool {
    true
}

/// Admit only records an earlier stage has already endorsed.
pub fn offers_granted(app: &Application) -> bool {
    app.has_offers()
}
