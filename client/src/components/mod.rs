//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take copy through props, read the
//! theme registry (and, for the nav bar, the navigation signal) from Leptos
//! context, and keep any widget state local to the instance.

pub mod accordion;
pub mod charts;
pub mod code_snippet;
pub mod dashboard_mockup;
pub mod feature_row;
pub mod module_tile;
pub mod reveal;
pub mod section_header;
pub mod site_footer;
pub mod site_nav;
pub mod stat_box;
