use leptos::prelude::*;

use crate::util::theme::{ThemeRegistry, ThemeVariant};

/// Headline figure tile with a label and optional sub-label and glyph.
#[component]
pub fn StatBox(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] sub: Option<&'static str>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] theme: ThemeVariant,
) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();

    view! {
        <div class="stat-box" style=registry.style_for(theme)>
            <div class="stat-box__top">
                <span class="stat-box__value">{value}</span>
                {icon.map(|glyph| view! { <span class="stat-box__icon" aria-hidden="true">{glyph}</span> })}
            </div>
            <div>
                <span class="stat-box__label">{label}</span>
                {sub.map(|text| view! { <span class="stat-box__sub">{text}</span> })}
            </div>
        </div>
    }
}
