#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reset_to_top_is_noop_but_callable() {
    reset_to_top();
}

#[test]
fn first_run_does_not_reset() {
    assert!(!should_reset(None, 0));
    assert!(!should_reset(None, 7));
}

#[test]
fn counter_change_resets() {
    assert!(should_reset(Some(0), 1));
    assert!(should_reset(Some(4), 5));
}

#[test]
fn unchanged_counter_does_not_reset() {
    assert!(!should_reset(Some(3), 3));
}
