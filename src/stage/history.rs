use crate::{
    application::{Application, Offer},
    criteria::{Criteria, always_applicable},
    stage::{Stage, StageError},
};
use log::debug;

/// Accepts applicants with a positive credit-history score.
pub struct HistoryCheck {
    criteria: Criteria,
}

impl HistoryCheck {
    pub fn new() -> Self {
        Self::with_criteria(always_applicable)
    }

    pub fn with_criteria(criteria: Criteria) -> Self {
        Self { criteria }
    }
}

impl Default for HistoryCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for HistoryCheck {
    fn name(&self) -> &'static str {
        "history"
    }

    fn applies(&self, app: &Application) -> bool {
        (self.criteria)(app)
    }

    fn process(&self, app: &mut Application) -> Result<(), StageError> {
        if app.history_score > 0 {
            app.grant(Offer::new(self.name()));
        } else {
            app.revoke_all();
        }
        debug!("{} processed application `{}`", self.name(), app.id);
        Ok(())
    }
}
