use super::*;

#[test]
fn latch_starts_hidden_and_detached() {
    let latch = VisibilityLatch::default();
    assert!(!latch.is_visible());
    assert!(!latch.is_observing());
}

#[test]
fn latch_ignores_reports_before_attach() {
    let mut latch = VisibilityLatch::default();
    assert!(!latch.report(true));
    assert!(!latch.is_visible());
}

#[test]
fn latch_fires_once_on_first_intersection() {
    let mut latch = VisibilityLatch::default();
    latch.attach();
    assert!(!latch.report(false));
    assert!(!latch.is_visible());

    assert!(latch.report(true));
    assert!(latch.is_visible());
    assert!(!latch.is_observing());

    assert!(!latch.report(true));
    assert!(latch.is_visible());
}

#[test]
fn latch_never_reverts_after_firing() {
    let mut latch = VisibilityLatch::default();
    latch.attach();
    latch.report(true);
    for intersecting in [false, true, false] {
        latch.report(intersecting);
        assert!(latch.is_visible());
    }
    latch.detach();
    assert!(latch.is_visible());
}

#[test]
fn reattach_after_firing_stays_detached() {
    let mut latch = VisibilityLatch::default();
    latch.attach();
    latch.report(true);
    latch.attach();
    assert!(!latch.is_observing());
}

#[test]
fn detach_before_intersection_prevents_firing() {
    let mut latch = VisibilityLatch::default();
    latch.attach();
    latch.detach();
    assert!(!latch.report(true));
    assert!(!latch.is_visible());
}

#[test]
fn reveal_threshold_is_partial_visibility() {
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
}
