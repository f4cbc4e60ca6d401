//! Numbered section heading.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

#[component]
pub fn SectionHeader(
    number: u8,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] theme: ThemeVariant,
) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();

    view! {
        <div class="section-header" style=registry.style_for(theme)>
            <Reveal>
                <div class="section-header__rule">
                    <span class="section-header__index">{format!("0{number}")}</span>
                    <h2 class="section-header__title">{title}</h2>
                </div>
                {subtitle.map(|text| view! { <p class="section-header__subtitle">{text}</p> })}
            </Reveal>
        </div>
    }
}
