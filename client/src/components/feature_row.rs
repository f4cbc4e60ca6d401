use leptos::prelude::*;

use crate::util::theme::{ThemeRegistry, ThemeVariant};

/// Three-column row: title, description, tag pills.
#[component]
pub fn FeatureRow(
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    #[prop(optional)] theme: ThemeVariant,
) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();

    view! {
        <div class="feature-row" style=registry.style_for(theme)>
            <h3 class="feature-row__title">{title}</h3>
            <p class="feature-row__description">{description}</p>
            <div class="feature-row__tags">
                {tags.iter().map(|tag| view! { <span class="feature-row__tag">{*tag}</span> }).collect_view()}
            </div>
        </div>
    }
}
