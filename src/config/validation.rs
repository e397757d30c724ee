//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every candidate is a usable header value
//! - Validate value ranges (timeouts > 0)
//! - Check mode-specific requirements (fixed needs a value)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RotatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::{PolicyMode, RotatorConfig, StrategyKind};
use crate::selector::UserAgent;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("user_agent.candidates must not be empty in rotate mode")]
    EmptyCandidates,

    #[error("user_agent.candidates[{index}] is not a valid header value: {value:?}")]
    InvalidCandidate { index: usize, value: String },

    #[error("user_agent.value is required in fixed mode")]
    MissingFixedValue,

    #[error("user_agent.value is not a valid header value: {0:?}")]
    InvalidFixedValue(String),

    #[error("user_agent.seed has no effect with the {0:?} strategy")]
    SeedWithoutRandom(StrategyKind),

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RotatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let ua = &config.user_agent;

    match ua.mode {
        PolicyMode::Unset => {}
        PolicyMode::Fixed => match &ua.value {
            None => errors.push(ValidationError::MissingFixedValue),
            Some(value) if UserAgent::parse(value.as_str()).is_none() => {
                errors.push(ValidationError::InvalidFixedValue(value.clone()));
            }
            Some(_) => {}
        },
        PolicyMode::Rotate => {
            if ua.candidates.is_empty() {
                errors.push(ValidationError::EmptyCandidates);
            }
            for (index, value) in ua.candidates.iter().enumerate() {
                if UserAgent::parse(value.as_str()).is_none() {
                    errors.push(ValidationError::InvalidCandidate {
                        index,
                        value: value.clone(),
                    });
                }
            }
            if ua.seed.is_some() && ua.strategy != StrategyKind::Random {
                errors.push(ValidationError::SeedWithoutRandom(ua.strategy));
            }
        }
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
