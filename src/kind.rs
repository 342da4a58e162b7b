//! Static registry of instantiable stage variants.
//!
//! The `define_stage_kinds!` macro is the single source of truth: it emits
//! the public [`StageKind`] constants, one constructor per variant, the
//! [`STAGE_TABLE`] lookup map and the [`from_code`] helper. A chain config
//! accepts a descriptor only if its kind resolves here.

use crate::{
    criteria::{Criteria, always_applicable},
    stage::{Stage, employment::EmploymentCheck, history::HistoryCheck, income::IncomeCheck},
};
use paste::paste;
use phf::{Map, phf_map};
use std::sync::Arc;

/// Handle naming a stage variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageKind {
    pub code: &'static str,
    pub name: &'static str,
}

impl StageKind {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this kind resolves to a registered, instantiable variant.
    #[inline]
    pub fn is_registered(&self) -> bool {
        STAGE_TABLE.contains_key(self.code)
    }
}

/// Registry entry: how to build the variant and which gate it defaults to.
#[derive(Clone, Copy)]
pub struct KindEntry {
    pub default_criteria: Criteria,
    pub construct: fn(Criteria) -> Arc<dyn Stage>,
}

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_stage_kinds {
    ($(
        $code:ident, $code_str:literal, $name:literal, $ty:ty
    ),* $(,)?) => {
        // Public `StageKind` constants
        $(
            pub const $code: StageKind = StageKind { code: $code_str, name: $name };
        )*

        paste! {
            // Per-variant constructors
            $(
                fn [<construct_ $code:lower>](criteria: Criteria) -> Arc<dyn Stage> {
                    Arc::new(<$ty>::with_criteria(criteria))
                }
            )*

            // Global lookup table (public)
            pub static STAGE_TABLE: Map<&'static str, KindEntry> = phf_map! {
                $(
                    $code_str => KindEntry {
                        default_criteria: always_applicable,
                        construct: [<construct_ $code:lower>],
                    }
                ),*
            };
        }

        // Helper: `from_code`
        pub fn from_code(code: &str) -> Option<StageKind> {
            let lower = code.to_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Stage variant definitions (single source of truth)
// ---------------------------------------------------------------------------
define_stage_kinds! {
    EMPLOYMENT, "employment", "Employment check", EmploymentCheck,
    INCOME, "income", "Income check", IncomeCheck,
    HISTORY, "history", "History check", HistoryCheck,
}
