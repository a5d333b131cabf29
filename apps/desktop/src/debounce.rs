//! Single-slot debounce: a generation counter where only the most recently
//! armed generation is allowed to fire. Arming replaces any pending
//! invocation instead of stacking a second timer.

/// Delay between the last input event and the filter run.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new pending invocation, invalidating any earlier one.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// True if `generation` is still the most recently armed one.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_last_of_a_burst_fires() {
        let mut debounce = Debouncer::new();
        let generations: Vec<u64> = (0..5).map(|_| debounce.arm()).collect();
        let still_current: Vec<u64> =
            generations.into_iter().filter(|g| debounce.is_current(*g)).collect();
        assert_eq!(still_current, vec![5]);
    }

    #[test]
    fn arming_invalidates_the_pending_generation() {
        let mut debounce = Debouncer::new();
        let first = debounce.arm();
        assert!(debounce.is_current(first));
        let second = debounce.arm();
        assert!(!debounce.is_current(first));
        assert!(debounce.is_current(second));
    }
}
