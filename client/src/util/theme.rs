//! Theme token registry.
//!
//! DESIGN
//! ======
//! Sections alternate between a dark and a light palette. The palettes are
//! plain data held in an immutable [`ThemeRegistry`] that the app shell
//! provides through context; components look up their variant and emit the
//! tokens as CSS custom properties on their root element, so the stylesheet
//! never hard-codes which palette a block uses.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Named palette variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Colour tokens for one palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    pub bg: &'static str,
    pub text: &'static str,
    pub subtext: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub card_bg: &'static str,
    pub card_hover: &'static str,
    pub code_bg: &'static str,
    pub code_border: &'static str,
    pub code_text: &'static str,
    /// Text colour on an accent-filled button.
    pub on_accent: &'static str,
}

impl ThemeTokens {
    /// Render the tokens as an inline `style` value of CSS custom properties.
    #[must_use]
    pub fn style_vars(&self) -> String {
        self.pairs()
            .iter()
            .map(|(name, value)| format!("--t-{name}:{value};"))
            .collect()
    }

    fn pairs(&self) -> [(&'static str, &'static str); 11] {
        [
            ("bg", self.bg),
            ("text", self.text),
            ("subtext", self.subtext),
            ("border", self.border),
            ("accent", self.accent),
            ("card-bg", self.card_bg),
            ("card-hover", self.card_hover),
            ("code-bg", self.code_bg),
            ("code-border", self.code_border),
            ("code-text", self.code_text),
            ("on-accent", self.on_accent),
        ]
    }
}

const DARK: ThemeTokens = ThemeTokens {
    bg: "#050505",
    text: "#ffffff",
    subtext: "#9ca3af",
    border: "#1f2937",
    accent: "#dca54c",
    card_bg: "#111111",
    card_hover: "#161616",
    code_bg: "#0a0a0a",
    code_border: "#1f2937",
    code_text: "#d1d5db",
    on_accent: "#000000",
};

const LIGHT: ThemeTokens = ThemeTokens {
    bg: "#f4f4f0",
    text: "#1a1a1a",
    subtext: "#4b5563",
    border: "#d0d0d0",
    accent: "#c2410c",
    card_bg: "#ffffff",
    card_hover: "#fbfbfb",
    code_bg: "#e5e5e5",
    code_border: "#d0d0d0",
    code_text: "#1a1a1a",
    on_accent: "#ffffff",
};

/// Immutable variant -> tokens lookup, provided once via context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeRegistry {
    dark: ThemeTokens,
    light: ThemeTokens,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl ThemeRegistry {
    /// The site's two palettes.
    #[must_use]
    pub const fn standard() -> Self {
        Self { dark: DARK, light: LIGHT }
    }

    #[must_use]
    pub fn tokens(&self, variant: ThemeVariant) -> &ThemeTokens {
        match variant {
            ThemeVariant::Dark => &self.dark,
            ThemeVariant::Light => &self.light,
        }
    }

    /// Inline style for a block rendered in `variant`.
    #[must_use]
    pub fn style_for(&self, variant: ThemeVariant) -> String {
        self.tokens(variant).style_vars()
    }
}
