use super::*;

#[test]
fn default_variant_is_dark() {
    assert_eq!(ThemeVariant::default(), ThemeVariant::Dark);
    assert_eq!(ThemeVariant::Dark.as_str(), "dark");
    assert_eq!(ThemeVariant::Light.as_str(), "light");
}

#[test]
fn registry_returns_distinct_palettes() {
    let registry = ThemeRegistry::standard();
    let dark = registry.tokens(ThemeVariant::Dark);
    let light = registry.tokens(ThemeVariant::Light);
    assert_ne!(dark, light);
    assert_eq!(dark.accent, "#dca54c");
    assert_eq!(light.accent, "#c2410c");
    assert_eq!(dark.bg, "#050505");
    assert_eq!(light.bg, "#f4f4f0");
}

#[test]
fn default_registry_is_standard() {
    assert_eq!(ThemeRegistry::default(), ThemeRegistry::standard());
}

#[test]
fn style_vars_emits_every_token() {
    let style = ThemeRegistry::standard().style_for(ThemeVariant::Light);
    for name in [
        "bg",
        "text",
        "subtext",
        "border",
        "accent",
        "card-bg",
        "card-hover",
        "code-bg",
        "code-border",
        "code-text",
        "on-accent",
    ] {
        assert!(style.contains(&format!("--t-{name}:")), "missing --t-{name} in {style}");
    }
    assert_eq!(style.matches(';').count(), 11);
    assert!(style.contains("--t-accent:#c2410c;"));
}
