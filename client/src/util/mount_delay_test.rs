use super::*;

#[test]
fn gate_is_not_ready_at_mount() {
    let gate = MountDelay::new(FADE_IN_MOUNT_DELAY);
    assert!(!gate.is_ready());
    assert!(!gate.is_cancelled());
    assert_eq!(gate.delay(), Duration::from_millis(100));
}

#[test]
fn gate_does_not_fire_before_delay() {
    let mut gate = MountDelay::new(Duration::from_millis(100));
    assert!(!gate.poll(Duration::ZERO));
    assert!(!gate.poll(Duration::from_millis(99)));
    assert!(!gate.is_ready());
}

#[test]
fn gate_fires_once_at_delay() {
    let mut gate = MountDelay::new(Duration::from_millis(100));
    assert!(gate.poll(Duration::from_millis(100)));
    assert!(gate.is_ready());
    assert!(!gate.poll(Duration::from_millis(250)));
    assert!(gate.is_ready());
}

#[test]
fn gate_fires_when_polled_late() {
    let mut gate = MountDelay::new(Duration::from_millis(100));
    assert!(gate.poll(Duration::from_secs(3)));
}

#[test]
fn cancelled_gate_never_fires() {
    let mut gate = MountDelay::new(Duration::from_millis(100));
    gate.poll(Duration::from_millis(40));
    gate.cancel();
    assert!(gate.is_cancelled());
    assert!(!gate.poll(Duration::from_millis(100)));
    assert!(!gate.poll(Duration::from_secs(10)));
    assert!(!gate.is_ready());
}

#[test]
fn cancel_after_firing_keeps_ready() {
    let mut gate = MountDelay::new(Duration::from_millis(100));
    gate.poll(Duration::from_millis(100));
    gate.cancel();
    assert!(gate.is_ready());
    assert!(!gate.is_cancelled());
}

#[test]
fn zero_delay_fires_on_first_poll() {
    let mut gate = MountDelay::new(Duration::ZERO);
    assert!(gate.poll(Duration::ZERO));
}
