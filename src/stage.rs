//! Core screening stage abstraction.
//!
//! A chain is an ordered sequence of stages. Each stage gates its own work
//! behind an applicability check and the engine moves the record to the next
//! stage whether or not the work ran: a gate skips a stage, never the stages
//! after it. Stages hold no per-traversal state, so one chain instance can
//! screen any number of records, including from several threads at once,
//! provided every traversal owns its record.

pub mod employment;
pub mod history;
pub mod income;

use crate::application::Application;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("screening failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single screening step.
pub trait Stage: Send + Sync {
    /// Stable identifier – used for offer tokens, log lines and error messages.
    fn name(&self) -> &'static str;

    /// Applicability gate. Returning `false` skips this stage's own logic;
    /// the rest of the chain still runs.
    fn applies(&self, _app: &Application) -> bool {
        true
    }

    /// The stage's own logic. Must not hand the record to another stage;
    /// only the engine advances the traversal.
    fn process(&self, app: &mut Application) -> Result<(), StageError>;
}
