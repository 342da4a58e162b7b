// src/chain.rs
use crate::{
    application::Application,
    config::ChainConfig,
    kind::STAGE_TABLE,
    stage::{Stage, StageError},
};
use log::trace;
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("cannot build a chain from an empty configuration")]
    EmptyConfig,
}

/// An executable screening chain: the single entry point for a traversal.
/// The stage order is fixed at construction; screening mutates the record,
/// never the chain.
pub struct Chain {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl Chain {
    /// Wire a chain directly from stage handles, in traversal order.
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self {
            stages: stages.into(),
        }
    }

    pub fn builder() -> ChainBuilder {
        ChainBuilder::default()
    }

    /// Instantiate one stage per descriptor, in configuration order. A
    /// descriptor carrying no gate override gets its variant's default
    /// criteria from the registry.
    pub fn from_config(config: &ChainConfig) -> Result<Self, BuildError> {
        if config.is_empty() {
            return Err(BuildError::EmptyConfig);
        }
        let mut stages: SmallVec<[Arc<dyn Stage>; 8]> = SmallVec::with_capacity(config.len());
        for spec in config.iter() {
            let entry = STAGE_TABLE
                .get(spec.kind.code())
                .expect("config admits registered kinds only – this is a bug");
            let criteria = spec.criteria.unwrap_or(entry.default_criteria);
            stages.push((entry.construct)(criteria));
        }
        Ok(Self { stages })
    }

    /// Run the record through every stage in order. A stage whose gate says
    /// no is skipped, not the stages after it; a stage error aborts the
    /// traversal and surfaces unchanged to the caller.
    pub fn screen(&self, mut app: Application) -> Result<Application, StageError> {
        for stage in &self.stages {
            if !stage.applies(&app) {
                trace!("{} skipped application `{}`", stage.name(), app.id);
                continue;
            }
            stage.process(&mut app)?;
        }
        Ok(app)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

#[derive(Default)]
pub struct ChainBuilder {
    stages: SmallVec<[Arc<dyn Stage>; 8]>,
}

impl ChainBuilder {
    pub fn add_stage<S: Stage + 'static>(mut self, stage: S) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn build(self) -> Chain {
        Chain {
            stages: self.stages,
        }
    }
}
