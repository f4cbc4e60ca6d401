//! Root application component, SSR shell, and the navigation shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_footer::SiteFooter;
use crate::components::site_nav::SiteNav;
use crate::pages::{fail_predict::FailPredictPage, power_guard::PowerGuardPage, qc_vision::QcVisionPage};
use crate::state::nav::{Module, NavState};
use crate::util::scroll;
use crate::util::theme::ThemeRegistry;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme registry and mounts the single site route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ThemeRegistry::standard());

    view! {
        <Stylesheet id="leptos" href="/pkg/iaone.css"/>
        <Title text="Industrial-AI.One"/>
        <Meta name="description" content="Blueprints for the autonomous factory: QC Vision, FailPredict and PowerGuard."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SiteShell/>
            </Routes>
        </Router>
    }
}

/// Owns the navigation state and renders nav, the selected page, and footer.
#[component]
pub fn SiteShell() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    let on_navigate = Callback::new(move |target: Module| {
        #[cfg(feature = "hydrate")]
        log::debug!("navigate {} -> {}", nav.with_untracked(|n| n.page.slug()), target.slug());
        nav.update(|n| n.navigate(target));
    });

    Effect::new(move |previous: Option<u64>| {
        let seq = nav.with(|n| n.scroll_reset_seq);
        if scroll::should_reset(previous, seq) {
            scroll::reset_to_top();
        }
        seq
    });

    // Only a page change remounts the page; menu toggles leave it alone.
    let page = Memo::new(move |_| nav.with(|n| n.page));

    view! {
        <div class="site">
            <SiteNav on_navigate=on_navigate/>
            <main>
                {move || match page.get() {
                    Module::QcVision => view! { <QcVisionPage on_navigate=on_navigate/> }.into_any(),
                    Module::FailPredict => view! { <FailPredictPage/> }.into_any(),
                    Module::PowerGuard => view! { <PowerGuardPage/> }.into_any(),
                }}
            </main>
            <SiteFooter/>
        </div>
    }
}
