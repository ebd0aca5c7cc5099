//! Counter state - the single integer the app displays and mutates

use std::fmt;

/// Integer counter starting at 0. Decrementing below zero is allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Increase by exactly 1. Returns the new value.
    pub fn increment(&mut self) -> i64 {
        self.value += 1;
        self.value
    }

    /// Decrease by exactly 1 (no floor). Returns the new value.
    pub fn decrement(&mut self) -> i64 {
        self.value -= 1;
        self.value
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Counter::new().value(), 0);
        assert_eq!(Counter::new().to_string(), "0");
    }

    #[test]
    fn increment_adds_one() {
        let mut c = Counter::new();
        assert_eq!(c.increment(), 1);
        assert_eq!(c.increment(), 2);
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn decrement_goes_negative() {
        let mut c = Counter::new();
        assert_eq!(c.decrement(), -1);
        assert_eq!(c.decrement(), -2);
        assert_eq!(c.to_string(), "-2");
    }

    proptest! {
        /// Incrementing then decrementing n times returns to the original value.
        #[test]
        fn increment_decrement_round_trip(n in 0usize..10_000) {
            let mut c = Counter::new();
            for _ in 0..n {
                c.increment();
            }
            prop_assert_eq!(c.value(), n as i64);
            for _ in 0..n {
                c.decrement();
            }
            prop_assert_eq!(c, Counter::new());
        }

        /// Any interleaving of presses lands on (increments - decrements).
        #[test]
        fn press_sequence_matches_sum(presses in proptest::collection::vec(any::<bool>(), 0..2_000)) {
            let mut c = Counter::new();
            let mut expected = 0i64;
            for up in presses {
                if up {
                    c.increment();
                    expected += 1;
                } else {
                    c.decrement();
                    expected -= 1;
                }
            }
            prop_assert_eq!(c.value(), expected);
        }
    }
}
