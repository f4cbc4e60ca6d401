//! Local UI state owned by the app shell and individual widgets.

pub mod disclosure;
pub mod nav;
