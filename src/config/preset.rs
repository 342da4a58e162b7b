use crate::{
    config::{ChainConfig, StageSpec},
    criteria::offers_granted,
    kind::{EMPLOYMENT, HISTORY, INCOME},
};

/// The canonical screening order: employment always weighs in; income and
/// history are consulted only once something has been granted.
pub fn standard() -> ChainConfig {
    ChainConfig::from_specs([
        StageSpec::new(EMPLOYMENT),
        StageSpec::with_criteria(INCOME, offers_granted),
        StageSpec::with_criteria(HISTORY, offers_granted),
    ])
    .expect("preset kinds are registered in STAGE_TABLE – this is a bug")
}

/// Every check runs regardless of earlier outcomes. The last check to run
/// still decides whether anything survives the traversal.
pub fn strict() -> ChainConfig {
    ChainConfig::from_specs([
        StageSpec::new(EMPLOYMENT),
        StageSpec::new(INCOME),
        StageSpec::new(HISTORY),
    ])
    .expect("preset kinds are registered in STAGE_TABLE – this is a bug")
}

/// History is consulted even when nothing was granted earlier; the other
/// checks only weigh in on an already-endorsed record.
pub fn fallback() -> ChainConfig {
    ChainConfig::from_specs([
        StageSpec::with_criteria(EMPLOYMENT, offers_granted),
        StageSpec::with_criteria(INCOME, offers_granted),
        StageSpec::new(HISTORY),
    ])
    .expect("preset kinds are registered in STAGE_TABLE – this is a bug")
}
