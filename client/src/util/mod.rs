//! Utility helpers shared across site modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (observers, timers, scrolling)
//! from page and component markup. Each browser binding sits on top of a
//! plain state type that is tested without a DOM.

pub mod bars;
pub mod mount_delay;
pub mod scroll;
pub mod theme;
pub mod visibility;
