//! User-Agent control for outgoing HTTP requests.
//!
//! Set a fixed `User-Agent`, strip it, or rotate it per request from a
//! validated candidate list.

pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod observability;
pub mod policy;
pub mod selector;

pub use client::RotatingClient;
pub use config::schema::RotatorConfig;
pub use error::{ClientError, HeaderError, SelectError};
pub use policy::UserAgentPolicy;
pub use selector::{select, CandidateList, Rotation, UserAgent};
