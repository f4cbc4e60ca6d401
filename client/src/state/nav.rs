//! Navigation state for the single-page shell.
//!
//! DESIGN
//! ======
//! The site has no URL routing between modules: the shell owns one
//! `RwSignal<NavState>` and every navigation surface (brand, link row,
//! mobile overlay, module tiles) funnels through [`NavState::navigate`].
//! Scroll reset is expressed as a sequence counter so the side effect can
//! live in an `Effect` instead of inside the state transition.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One of the three marketed product modules; each has its own page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Module {
    /// Visual defect inspection.
    #[default]
    QcVision,
    /// Vibration-based failure prediction.
    FailPredict,
    /// Energy anomaly detection.
    PowerGuard,
}

impl Module {
    /// Navigation order.
    pub const ALL: [Module; 3] = [Module::QcVision, Module::FailPredict, Module::PowerGuard];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::QcVision => "qc-vision",
            Self::FailPredict => "failpredict",
            Self::PowerGuard => "powerguard",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.slug() == slug)
    }

    /// Lowercase nav label (the slug with its hyphen turned into a space).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::QcVision => "qc vision",
            Self::FailPredict => "failpredict",
            Self::PowerGuard => "powerguard",
        }
    }

    /// Product name as printed in headings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::QcVision => "QC Vision",
            Self::FailPredict => "FailPredict",
            Self::PowerGuard => "PowerGuard",
        }
    }

    /// 1-based position, rendered as "Module 01".
    #[must_use]
    pub fn ordinal(self) -> u8 {
        match self {
            Self::QcVision => 1,
            Self::FailPredict => 2,
            Self::PowerGuard => 3,
        }
    }
}

/// Current page, mobile menu flag, and scroll-reset counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub page: Module,
    pub menu_open: bool,
    /// Bumped on every navigation; the shell scrolls to the top on change.
    pub scroll_reset_seq: u64,
}

impl NavState {
    /// Select `target`, close the mobile menu, and request a scroll reset.
    pub fn navigate(&mut self, target: Module) {
        self.page = target;
        self.menu_open = false;
        self.scroll_reset_seq = self.scroll_reset_seq.wrapping_add(1);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
