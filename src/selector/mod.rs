//! Header selection subsystem.
//!
//! # Data Flow
//! ```text
//! config candidates (Vec<String>)
//!     → candidates.rs (validate into an immutable CandidateList)
//!     → Apply rotation strategy:
//!         - random.rs (uniform pick from a seedable generator)
//!         - round_robin.rs (cycle through candidates in order)
//!     → &UserAgent handed to the policy layer
//! ```
//!
//! # Design Decisions
//! - Lists are validated once at construction; picking never fails
//! - The random generator is passed in explicitly, never a process global
//! - Strategies only hold their own cursor/generator, never the list

pub mod candidates;
pub mod random;
pub mod round_robin;

use rand::Rng;

use crate::error::SelectError;

pub use candidates::{CandidateList, UserAgent};
pub use random::UniformRandom;
pub use round_robin::RoundRobin;

/// Rotation strategy trait.
pub trait Rotation: Send + Sync + std::fmt::Debug {
    /// Pick the value to send with the next request.
    fn next_value<'a>(&self, candidates: &'a CandidateList) -> &'a UserAgent;
}

/// Pick one element of `candidates` uniformly at random.
///
/// Every call is independent: repeats are allowed and nothing is remembered
/// between calls. The only effect is advancing `rng`.
pub fn select<'a, T, R>(candidates: &'a [T], rng: &mut R) -> Result<&'a T, SelectError>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(SelectError::InvalidArgument);
    }
    let index = rng.gen_range(0..candidates.len());
    Ok(&candidates[index])
}
