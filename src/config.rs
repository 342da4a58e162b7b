//! Declarative chain configuration.
//!
//! A config is an ordered list of stage descriptors. Every mutation validates
//! its arguments up front: a descriptor naming an unregistered variant is
//! refused at the call site and the config is left exactly as it was. Nothing
//! else is checked: duplicates, emptiness and gate sanity are the caller's
//! business (an empty config surfaces later, at build time).

pub mod preset;

use crate::{criteria::Criteria, kind::StageKind};
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{0}` is not a registered stage kind")]
    UnknownKind(&'static str),
}

/// Descriptor: which variant to instantiate, and an optional gate override
/// replacing that variant's default criteria.
#[derive(Debug, Clone, Copy)]
pub struct StageSpec {
    pub kind: StageKind,
    pub criteria: Option<Criteria>,
}

impl StageSpec {
    #[inline]
    pub const fn new(kind: StageKind) -> Self {
        Self {
            kind,
            criteria: None,
        }
    }

    #[inline]
    pub const fn with_criteria(kind: StageKind, criteria: Criteria) -> Self {
        Self {
            kind,
            criteria: Some(criteria),
        }
    }
}

/// Ordered, validated list of stage descriptors.
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    specs: SmallVec<[StageSpec; 8]>,
}

impl ChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from descriptors, validating each one.
    pub fn from_specs<I>(specs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = StageSpec>,
    {
        let mut config = Self::new();
        config.extend(specs)?;
        Ok(config)
    }

    /// Append a descriptor at the tail.
    pub fn append(&mut self, spec: StageSpec) -> Result<(), ConfigError> {
        Self::validate(&spec)?;
        self.specs.push(spec);
        Ok(())
    }

    /// Insert a descriptor at `index`. Out-of-range indexes clamp to the
    /// tail, as with splice-style inserts.
    pub fn insert(&mut self, index: usize, spec: StageSpec) -> Result<(), ConfigError> {
        Self::validate(&spec)?;
        let index = index.min(self.specs.len());
        self.specs.insert(index, spec);
        Ok(())
    }

    /// Append every descriptor, or none: the whole batch is validated before
    /// the first element lands.
    pub fn extend<I>(&mut self, specs: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = StageSpec>,
    {
        let incoming: SmallVec<[StageSpec; 8]> = specs.into_iter().collect();
        for spec in &incoming {
            Self::validate(spec)?;
        }
        self.specs.extend(incoming);
        Ok(())
    }

    /// Concatenate two already-validated configs.
    pub fn concat(mut self, other: ChainConfig) -> ChainConfig {
        self.specs.extend(other.specs);
        self
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageSpec> {
        self.specs.iter()
    }

    fn validate(spec: &StageSpec) -> Result<(), ConfigError> {
        if spec.kind.is_registered() {
            Ok(())
        } else {
            Err(ConfigError::UnknownKind(spec.kind.code()))
        }
    }
}
