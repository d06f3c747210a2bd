//! Derived Statistics
//!
//! Recomputed from the full collection on every read.

use crate::domain::Dream;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    /// Mean progress rounded half-up, 0 for an empty collection
    pub average_progress: u32,
    /// Dreams at 100%
    pub achieved: usize,
}

impl Stats {
    pub fn of(dreams: &[Dream]) -> Self {
        let total = dreams.len();
        let sum: u64 = dreams.iter().map(|d| u64::from(d.progress)).sum();
        Self {
            total,
            average_progress: round_half_up(sum, total as u64),
            achieved: dreams.iter().filter(|d| d.is_achieved()).count(),
        }
    }
}

/// `round(sum / count)` with halves rounded up, in integer arithmetic.
fn round_half_up(sum: u64, count: u64) -> u32 {
    if count == 0 {
        return 0;
    }
    ((sum * 2 + count) / (count * 2)) as u32
}
