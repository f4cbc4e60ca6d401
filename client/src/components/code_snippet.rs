use leptos::prelude::*;

/// Preformatted code shown as text.
#[component]
pub fn CodeSnippet(code: &'static str) -> impl IntoView {
    view! { <pre class="code-snippet">{code}</pre> }
}
