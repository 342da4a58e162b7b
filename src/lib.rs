pub mod application;
pub mod chain;
pub mod config;
pub mod criteria;
pub mod kind;
pub mod stage;

pub use application::{Application, Offer};
pub use chain::{BuildError, Chain, ChainBuilder};
pub use config::{ChainConfig, ConfigError, StageSpec};
pub use criteria::{Criteria, always_applicable, offers_granted};
pub use kind::{EMPLOYMENT, HISTORY, INCOME, StageKind, from_code};
pub use stage::employment::EmploymentCheck;
pub use stage::history::HistoryCheck;
pub use stage::income::IncomeCheck;
pub use stage::{Stage, StageError};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
