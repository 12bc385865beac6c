//! # Clock Driver Tests
//!
//! Toggling, rising-edge detection, and transition counts.

use proptest::prelude::*;
use rstest::rstest;
use rvtb_core::tb::{ClockDriver, is_rising_edge, toggle};

#[rstest]
#[case(false, false, false)]
#[case(false, true, true)]
#[case(true, false, false)]
#[case(true, true, false)]
fn test_rising_edge_truth_table(#[case] prev: bool, #[case] cur: bool, #[case] rising: bool) {
    assert_eq!(is_rising_edge(prev, cur), rising);
}

#[test]
fn test_toggle() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn test_clock_starts_low() {
    assert!(!ClockDriver::new().level());
    assert_eq!(ClockDriver::default(), ClockDriver::new());
}

#[test]
fn test_first_step_is_rising_edge() {
    let mut clock = ClockDriver::new();
    assert_eq!(clock.step(), (true, true));
    assert_eq!(clock.step(), (false, false));
    assert_eq!(clock.step(), (true, true));
}

proptest! {
    #[test]
    fn level_after_n_steps_is_parity(n in 0u64..4096) {
        let mut clock = ClockDriver::new();
        for _ in 0..n {
            let _ = clock.step();
        }
        prop_assert_eq!(clock.level(), n % 2 == 1);
    }

    #[test]
    fn rising_and_falling_counts_balance(n in 0u64..4096) {
        let mut clock = ClockDriver::new();
        let mut rising = 0u64;
        let mut falling = 0u64;
        for _ in 0..n {
            let prev = clock.level();
            let (cur, edge) = clock.step();
            if edge {
                rising += 1;
            }
            if prev && !cur {
                falling += 1;
            }
        }
        prop_assert!(rising.abs_diff(falling) <= 1);
        prop_assert_eq!(rising + falling, n);
    }
}
