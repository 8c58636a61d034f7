use crate::error::{Result, TrackError};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of a track entry, unique per [`IdGenerator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TrackId(u64);

impl TrackId {
    /// Get the raw numeric value
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out track ids in strictly increasing order
///
/// Shared by reference between everything that constructs entries. The counter
/// is atomic, so entries may be constructed from several threads at once.
/// The last id handed out is `u64::MAX - 1`; after that the generator is exhausted.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first id is `first` (0 is treated as 1)
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Take the next id, or fail once the counter cannot advance any further
    pub fn next_id(&self) -> Result<TrackId> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map(TrackId)
            .map_err(|_| TrackError::IdsExhausted)
    }

    /// The id the next call to [`next_id`](Self::next_id) will return
    pub fn peek(&self) -> TrackId {
        TrackId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let ids = IdGenerator::new();
        assert_eq!(ids.peek().get(), 1);
        assert_eq!(ids.next_id().unwrap().get(), 1);
        assert_eq!(ids.next_id().unwrap().get(), 2);
        assert_eq!(ids.peek().get(), 3);
    }

    #[test]
    fn test_starting_at_zero_is_bumped() {
        let ids = IdGenerator::starting_at(0);
        assert_eq!(ids.next_id().unwrap().get(), 1);

        let ids = IdGenerator::starting_at(42);
        assert_eq!(ids.next_id().unwrap().to_string(), "42");
    }

    #[test]
    fn test_exhausted_generator_never_wraps() {
        let ids = IdGenerator::starting_at(u64::MAX - 2);

        let a = ids.next_id().unwrap();
        let b = ids.next_id().unwrap();
        assert!(b > a);
        assert_eq!(b.get(), u64::MAX - 1);

        assert_eq!(ids.next_id(), Err(TrackError::IdsExhausted));
        assert_eq!(ids.next_id(), Err(TrackError::IdsExhausted));
        assert_eq!(ids.peek().get(), u64::MAX);
    }

    #[test]
    fn test_concurrent_ids_are_unique() {
        let ids = IdGenerator::new();

        let collected: Vec<TrackId> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..250).map(|_| ids.next_id().unwrap()).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<TrackId> = collected.iter().copied().collect();
        assert_eq!(unique.len(), 1000);
        assert_eq!(ids.peek().get(), 1001);
    }
}
