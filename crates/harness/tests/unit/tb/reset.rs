//! # Reset Sequencer Tests
//!
//! Timing of the reset window and the level produced for each polarity.

use proptest::prelude::*;
use rvtb_core::config::{ResetConfig, ResetPolarity};
use rvtb_core::tb::{ResetSequencer, is_reset_asserted};

#[test]
fn test_default_window_boundary() {
    let seq = ResetSequencer::from(ResetConfig::default());
    assert!(seq.is_asserted(0));
    assert!(seq.is_asserted(99));
    assert!(!seq.is_asserted(100));
    assert!(!seq.is_asserted(u64::MAX));
}

#[test]
fn test_active_high_levels() {
    let seq = ResetSequencer::new(100, ResetPolarity::ActiveHigh);
    assert!(seq.level(0));
    assert!(seq.level(99));
    assert!(!seq.level(100));
}

#[test]
fn test_active_low_levels() {
    let seq = ResetSequencer::new(100, ResetPolarity::ActiveLow);
    assert!(!seq.level(0));
    assert!(!seq.level(99));
    assert!(seq.level(100));
}

#[test]
fn test_accessors() {
    let seq = ResetSequencer::new(42, ResetPolarity::ActiveLow);
    assert_eq!(seq.window(), 42);
    assert_eq!(seq.polarity(), ResetPolarity::ActiveLow);
}

proptest! {
    #[test]
    fn asserted_iff_inside_window(elapsed in 0u64..10_000, window in 1u64..5_000) {
        let high = is_reset_asserted(elapsed, window, ResetPolarity::ActiveHigh);
        let low = is_reset_asserted(elapsed, window, ResetPolarity::ActiveLow);
        prop_assert_eq!(high, elapsed < window);
        prop_assert_eq!(high, low);
    }

    #[test]
    fn polarities_drive_opposite_levels(elapsed in any::<u64>(), window in 1u64..u64::MAX) {
        let high = ResetSequencer::new(window, ResetPolarity::ActiveHigh);
        let low = ResetSequencer::new(window, ResetPolarity::ActiveLow);
        prop_assert_eq!(high.level(elapsed), !low.level(elapsed));
        prop_assert_eq!(high.level(elapsed), high.is_asserted(elapsed));
    }

    #[test]
    fn sequencer_is_pure(elapsed in any::<u64>(), window in 1u64..u64::MAX) {
        let seq = ResetSequencer::new(window, ResetPolarity::ActiveHigh);
        prop_assert_eq!(seq.level(elapsed), seq.level(elapsed));
    }
}
