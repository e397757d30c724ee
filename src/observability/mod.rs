//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! selector / policy / client / config
//!     → tracing events with structured fields
//!     → logging.rs (subscriber: EnvFilter + fmt layer)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured filter
//! - Picks are logged at debug, requests at info

pub mod logging;
