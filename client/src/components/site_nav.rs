//! Fixed top navigation: brand, desktop link row, mobile menu overlay.

use leptos::prelude::*;

use crate::state::nav::{Module, NavState};

#[component]
pub fn SiteNav(on_navigate: Callback<Module>) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let active = Memo::new(move |_| nav.with(|n| n.page));
    let menu_open = Memo::new(move |_| nav.with(|n| n.menu_open));

    view! {
        <nav class="site-nav">
            <div class="site-nav__brand" on:click=move |_| on_navigate.run(Module::default())>
                <Brand/>
            </div>

            <div class="site-nav__links">
                {Module::ALL
                    .into_iter()
                    .map(|module| {
                        view! {
                            <button
                                class="site-nav__link"
                                class=("site-nav__link--active", move || active.get() == module)
                                on:click=move |_| on_navigate.run(module)
                            >
                                {module.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <button
                class="site-nav__menu-toggle"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| nav.update(NavState::toggle_menu)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || menu_open.get()>
                <div class="site-nav__overlay">
                    {Module::ALL
                        .into_iter()
                        .map(|module| {
                            view! {
                                <button class="site-nav__overlay-link" on:click=move |_| on_navigate.run(module)>
                                    {module.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

/// Wordmark shared by the nav bar and the footer.
#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <span class="brand">"INDUSTRIAL"<span class="accent">"AI"</span>".ONE"</span>
    }
}
