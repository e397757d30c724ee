//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the rotator.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::defaults::DEFAULT_USER_AGENTS;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RotatorConfig {
    /// How outgoing requests get their `User-Agent`.
    pub user_agent: UserAgentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Policy mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyMode {
    /// No `User-Agent` header at all.
    Unset,
    /// Always send `value`.
    Fixed,
    /// Pick from `candidates` per request.
    #[default]
    Rotate,
}

/// Rotation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Random,
    RoundRobin,
}

/// `User-Agent` configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UserAgentConfig {
    pub mode: PolicyMode,

    /// Value sent in `fixed` mode.
    pub value: Option<String>,

    /// Strategy used in `rotate` mode.
    pub strategy: StrategyKind,

    /// Seed for the random strategy (entropy when absent).
    pub seed: Option<u64>,

    /// Candidate values for `rotate` mode.
    pub candidates: Vec<String>,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            mode: PolicyMode::Rotate,
            value: None,
            strategy: StrategyKind::Random,
            seed: None,
            candidates: DEFAULT_USER_AGENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Timeout configuration for outgoing requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "ua_rotator=info".to_string(),
        }
    }
}
