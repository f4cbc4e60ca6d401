//! Disclosure widget with a clickable header, used for code samples.

use leptos::prelude::*;

use crate::state::disclosure::Disclosure;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

#[component]
pub fn Accordion(
    title: &'static str,
    #[prop(optional)] theme: ThemeVariant,
    children: Children,
) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();
    let state = RwSignal::new(Disclosure::default());
    let expanded = move || state.with(|d| d.expanded);

    view! {
        <div class="accordion" style=registry.style_for(theme)>
            <button
                class="accordion__header"
                aria-expanded=move || expanded().to_string()
                on:click=move |_| state.update(Disclosure::toggle)
            >
                <span class="accordion__title">
                    <span class="accordion__icon" aria-hidden="true">"</>"</span>
                    {title}
                </span>
                <span class="accordion__chevron" aria-hidden="true">
                    {move || if expanded() { "▴" } else { "▾" }}
                </span>
            </button>
            <div class="accordion__body" class=("accordion__body--open", expanded)>
                <div class="accordion__content">{children()}</div>
            </div>
        </div>
    }
}
