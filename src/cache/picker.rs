// src/cache/picker.rs
// Chooses which canned reply to show once a pattern has matched

use rand::Rng;

/// Source of the index into a matched pattern's reply list.
///
/// Only affects which string is shown, never whether a match happened.
pub trait ResponsePicker: Send + Sync {
    /// Index in `0..len`. `len` is always at least 1.
    fn pick(&self, len: usize) -> usize;
}

/// Uniformly random choice (production default)
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always the same slot, clamped to the list length
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picker_in_range() {
        let picker = RandomPicker;
        for _ in 0..100 {
            assert!(picker.pick(3) < 3);
        }
        assert_eq!(picker.pick(1), 0);
    }

    #[test]
    fn test_fixed_picker_clamps() {
        assert_eq!(FixedPicker(0).pick(3), 0);
        assert_eq!(FixedPicker(2).pick(3), 2);
        assert_eq!(FixedPicker(9).pick(3), 2);
    }
}
