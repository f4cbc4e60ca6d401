//! Expand/collapse state for a single accordion.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

/// Each accordion owns one of these; instances never coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    pub expanded: bool,
}

impl Disclosure {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}
