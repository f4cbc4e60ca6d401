//! One-shot entrance transitions: scroll-triggered [`Reveal`] and
//! mount-delayed [`FadeIn`].
//!
//! Both only toggle classes; the offset is a CSS transform, so hidden
//! content still occupies its layout slot.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

use crate::util::mount_delay::{FADE_IN_MOUNT_DELAY, use_mount_delay};
use crate::util::visibility::{REVEAL_THRESHOLD, use_on_screen};

/// Class list for a transition wrapper: `base`, `base--visible` once shown,
/// then any caller classes.
#[must_use]
pub fn transition_class(base: &str, visible: bool, extra: &str) -> String {
    let mut class = base.to_owned();
    if visible {
        class.push(' ');
        class.push_str(base);
        class.push_str("--visible");
    }
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[must_use]
pub fn transition_delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {delay_ms}ms;")
}

/// Fades and lifts its children into place the first time they scroll
/// into view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let visible = use_on_screen(node_ref, REVEAL_THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=move || transition_class("reveal", visible.get(), &class)
            style=transition_delay_style(delay_ms)
        >
            {children()}
        </div>
    }
}

/// Above-the-fold variant of [`Reveal`]: starts shortly after mount.
#[component]
pub fn FadeIn(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let mounted = use_mount_delay(FADE_IN_MOUNT_DELAY);

    view! {
        <div
            class=move || transition_class("fade-in", mounted.get(), "")
            style=transition_delay_style(delay_ms)
        >
            {children()}
        </div>
    }
}
