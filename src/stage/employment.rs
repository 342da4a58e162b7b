use crate::{
    application::{Application, Offer},
    criteria::{Criteria, always_applicable},
    stage::{Stage, StageError},
};
use log::debug;

/// Accepts applicants that hold a job with a positive employment score.
/// Anything else revokes every grant made so far in the traversal.
pub struct EmploymentCheck {
    criteria: Criteria,
}

impl EmploymentCheck {
    pub fn new() -> Self {
        Self::with_criteria(always_applicable)
    }

    pub fn with_criteria(criteria: Criteria) -> Self {
        Self { criteria }
    }
}

impl Default for EmploymentCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for EmploymentCheck {
    fn name(&self) -> &'static str {
        "employment"
    }

    fn applies(&self, app: &Application) -> bool {
        (self.criteria)(app)
    }

    fn process(&self, app: &mut Application) -> Result<(), StageError> {
        if app.is_employed && app.employment_score > 0 {
            app.grant(Offer::new(self.name()));
        } else {
            app.revoke_all();
        }
        debug!("{} processed application `{}`", self.name(), app.id);
        Ok(())
    }
}
