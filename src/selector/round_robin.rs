//! Round-robin rotation.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::selector::{CandidateList, Rotation, UserAgent};

/// Round-robin selector.
/// Stores an internal counter to rotate through candidates.
#[derive(Debug, Default)]
pub struct RoundRobin {
    counter: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rotation for RoundRobin {
    fn next_value<'a>(&self, candidates: &'a CandidateList) -> &'a UserAgent {
        let position = self.counter.fetch_add(1, Ordering::Relaxed);
        let picked = candidates.cycle(position);
        tracing::debug!(position, user_agent = %picked, "Selected round-robin User-Agent");
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_robin() {
        let rotation = RoundRobin::new();
        let list = CandidateList::new(["a/1", "b/2"]).unwrap();

        assert_eq!(rotation.next_value(&list).as_str(), "a/1");
        assert_eq!(rotation.next_value(&list).as_str(), "b/2");
        assert_eq!(rotation.next_value(&list).as_str(), "a/1");
    }

    #[test]
    fn test_round_robin_single_candidate() {
        let rotation = RoundRobin::new();
        let list = CandidateList::new(["only/1"]).unwrap();
        for _ in 0..5 {
            assert_eq!(rotation.next_value(&list).as_str(), "only/1");
        }
    }
}
