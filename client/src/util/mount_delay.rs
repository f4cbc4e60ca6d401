//! Delayed one-shot flag for content that is already in view on load.
//!
//! Hero blocks cannot wait for an intersection report (they start inside
//! the viewport), so they flip a flag a fixed time after mount instead.
//! [`MountDelay`] is the gate; [`use_mount_delay`] drives it with a browser
//! timeout that is cancelled when the component is torn down.

#[cfg(test)]
#[path = "mount_delay_test.rs"]
mod mount_delay_test;

use std::time::Duration;

use leptos::prelude::*;

/// Delay between mount and the `FadeIn` transition starting.
pub const FADE_IN_MOUNT_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    Pending,
    Fired,
    Cancelled,
}

/// One-shot timer gate: fires once after `delay`, never after `cancel`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountDelay {
    delay: Duration,
    state: GateState,
}

impl MountDelay {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, state: GateState::Pending }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Check the gate `elapsed` after mount. Returns `true` exactly once.
    pub fn poll(&mut self, elapsed: Duration) -> bool {
        if self.state != GateState::Pending || elapsed < self.delay {
            return false;
        }
        self.state = GateState::Fired;
        true
    }

    /// Teardown. A gate that already fired keeps its state.
    pub fn cancel(&mut self) {
        if self.state == GateState::Pending {
            self.state = GateState::Cancelled;
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == GateState::Fired
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.state == GateState::Cancelled
    }
}

/// Signal that turns `true` once `delay` has passed since mount.
pub fn use_mount_delay(delay: Duration) -> ReadSignal<bool> {
    let (ready, set_ready) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let gate = StoredValue::new(MountDelay::new(delay));
        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        let delay_ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);

        Effect::new(move |_| {
            if timer.with_value(Option::is_some) || gate.with_value(|g| g.state != GateState::Pending) {
                return;
            }
            let timeout = gloo_timers::callback::Timeout::new(delay_ms, move || {
                if gate.try_update_value(|g| g.poll(delay)).unwrap_or(false) {
                    set_ready.set(true);
                }
            });
            timer.set_value(Some(timeout));
        });

        on_cleanup(move || {
            let _ = gate.try_update_value(MountDelay::cancel);
            // Dropping a pending `Timeout` clears it.
            drop(timer.try_update_value(Option::take));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (delay, set_ready);

    ready
}
