//! User-Agent policy: set, unset or rotate.
//!
//! # Responsibilities
//! - Resolve the value for the next outgoing request
//! - Write it into a header map, or strip the header entirely
//!
//! # Design Decisions
//! - The selected value is inserted untouched
//! - `Unset` removes the header rather than sending an empty one

use reqwest::header::{HeaderMap, USER_AGENT};

use crate::config::schema::{PolicyMode, StrategyKind, UserAgentConfig};
use crate::error::HeaderError;
use crate::selector::{CandidateList, RoundRobin, Rotation, UniformRandom, UserAgent};

/// How the `User-Agent` header of outgoing requests is chosen.
#[derive(Debug)]
pub enum UserAgentPolicy {
    /// Send no `User-Agent` header.
    Unset,
    /// Send the same value on every request.
    Fixed(UserAgent),
    /// Pick a value per request.
    Rotate {
        candidates: CandidateList,
        rotation: Box<dyn Rotation>,
    },
}

impl UserAgentPolicy {
    pub fn fixed(value: impl Into<String>) -> Result<Self, HeaderError> {
        let value = value.into();
        match UserAgent::parse(value.clone()) {
            Some(ua) => Ok(Self::Fixed(ua)),
            None => Err(HeaderError::InvalidValue { index: 0, value }),
        }
    }

    pub fn rotate(candidates: CandidateList, rotation: impl Rotation + 'static) -> Self {
        Self::Rotate {
            candidates,
            rotation: Box::new(rotation),
        }
    }

    /// Uniform random rotation seeded from OS entropy.
    pub fn random(candidates: CandidateList) -> Self {
        Self::rotate(candidates, UniformRandom::new())
    }

    /// Build the policy described by the `[user_agent]` config section.
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, HeaderError> {
        match config.mode {
            PolicyMode::Unset => Ok(Self::Unset),
            PolicyMode::Fixed => match &config.value {
                Some(value) => Self::fixed(value.clone()),
                None => Err(HeaderError::MissingValue),
            },
            PolicyMode::Rotate => {
                let candidates = CandidateList::new(config.candidates.iter().cloned())?;
                let policy = match (config.strategy, config.seed) {
                    (StrategyKind::Random, Some(seed)) => {
                        Self::rotate(candidates, UniformRandom::seeded(seed))
                    }
                    (StrategyKind::Random, None) => Self::random(candidates),
                    (StrategyKind::RoundRobin, _) => Self::rotate(candidates, RoundRobin::new()),
                };
                Ok(policy)
            }
        }
    }

    /// The value for the next request, or `None` when unset.
    pub fn resolve(&self) -> Option<&UserAgent> {
        match self {
            Self::Unset => None,
            Self::Fixed(ua) => Some(ua),
            Self::Rotate {
                candidates,
                rotation,
            } => Some(rotation.next_value(candidates)),
        }
    }

    /// Apply the policy to `headers`, returning the value that was set.
    pub fn apply(&self, headers: &mut HeaderMap) -> Option<&UserAgent> {
        match self.resolve() {
            Some(ua) => {
                headers.insert(USER_AGENT, ua.header_value().clone());
                Some(ua)
            }
            None => {
                headers.remove(USER_AGENT);
                None
            }
        }
    }
}
