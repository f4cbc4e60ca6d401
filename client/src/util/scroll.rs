//! Window scroll reset used after page navigation.
//!
//! Requires a browser environment; server rendering has no window, so the
//! non-hydrate build is a no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Scroll the window back to the top-left corner.
pub fn reset_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Whether a change of the navigation scroll counter should reset scroll.
///
/// `previous` is `None` on the first run of the watcher, which belongs to
/// the initial render and must leave the scroll position alone.
#[must_use]
pub fn should_reset(previous: Option<u64>, current: u64) -> bool {
    previous.is_some_and(|prev| prev != current)
}
