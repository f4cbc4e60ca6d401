//! Page views, one per product module.
//!
//! ARCHITECTURE
//! ============
//! Pages only compose content blocks with fixed copy. The shell decides
//! which page is mounted; a page receives at most the navigation callback.

pub mod fail_predict;
pub mod power_guard;
pub mod qc_vision;

use leptos::prelude::*;

use crate::components::reveal::FadeIn;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

/// Full-height hero with a pulsing eyebrow, headline, and lede, each fading
/// in after mount.
#[component]
pub(crate) fn Hero(
    eyebrow: &'static str,
    lede: &'static str,
    #[prop(optional)] theme: ThemeVariant,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();

    view! {
        <header class="hero" style=registry.style_for(theme)>
            <FadeIn delay_ms=100>
                <div class="hero__eyebrow">
                    <span class="hero__pulse"></span>
                    <span class="mono-caption accent">{eyebrow}</span>
                </div>
            </FadeIn>
            <FadeIn delay_ms=300>
                <h1 class="hero__title">{children()}</h1>
            </FadeIn>
            <FadeIn delay_ms=500>
                <p class="hero__lede">{lede}</p>
            </FadeIn>
        </header>
    }
}
