use crate::{
    application::{Application, Offer},
    criteria::{Criteria, always_applicable},
    stage::{Stage, StageError},
};
use log::debug;

/// Minimum yearly income an applicant must strictly exceed.
pub const MIN_YEARLY_INCOME: u64 = 1000;

/// Accepts applicants earning strictly more than the configured minimum;
/// earning the minimum exactly is a rejection.
pub struct IncomeCheck {
    criteria: Criteria,
    min_yearly_income: u64,
}

impl IncomeCheck {
    pub fn new() -> Self {
        Self::with_criteria(always_applicable)
    }

    pub fn with_criteria(criteria: Criteria) -> Self {
        Self {
            criteria,
            min_yearly_income: MIN_YEARLY_INCOME,
        }
    }

    /// Override the default minimum.
    pub fn with_min_income(mut self, min_yearly_income: u64) -> Self {
        self.min_yearly_income = min_yearly_income;
        self
    }
}

impl Default for IncomeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for IncomeCheck {
    fn name(&self) -> &'static str {
        "income"
    }

    fn applies(&self, app: &Application) -> bool {
        (self.criteria)(app)
    }

    fn process(&self, app: &mut Application) -> Result<(), StageError> {
        if app.yearly_income > self.min_yearly_income {
            app.grant(Offer::new(self.name()));
        } else {
            app.revoke_all();
        }
        debug!("{} processed application `{}`", self.name(), app.id);
        Ok(())
    }
}
