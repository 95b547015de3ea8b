//! # Domain Module
//!
//! Client-side domain logic, kept free of egui so it can be tested directly:
//! pure calendar math, the booking mutation controller, form-to-patch
//! builders, itinerary draft editing, and dashboard counts.

pub mod bookings;
pub mod calendar;
pub mod forms;
pub mod itineraries;
pub mod stats;
pub mod tours;

/// Monotonically increasing fetch sequence.
///
/// Every wholesale reload takes a fresh number from [`FetchSeq::begin`]; when
/// the fetch completes, its result is applied only if the number is still the
/// latest issued. Rapid month navigation, refocus refreshes, and
/// post-mutation reloads can otherwise interleave and let an older response
/// overwrite a newer one.
#[derive(Debug, Default)]
pub struct FetchSeq {
    issued: u64,
}

impl FetchSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next sequence number. The previous one immediately becomes
    /// stale.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a completing fetch is still the latest issued.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_fetch_invalidates_older_one() {
        let mut seq = FetchSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn sequence_numbers_increase_monotonically() {
        let mut seq = FetchSeq::new();
        let a = seq.begin();
        let b = seq.begin();
        let c = seq.begin();
        assert!(a < b && b < c);
    }
}
