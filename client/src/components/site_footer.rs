use leptos::prelude::*;

use crate::components::site_nav::Brand;

const FOOTER_LINKS: [&str; 3] = ["Documentation", "GitHub", "Contact"];

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__top">
                <div>
                    <h2 class="site-footer__brand"><Brand/></h2>
                    <p class="site-footer__tagline">"Blueprints for the autonomous future."</p>
                </div>
                <div class="site-footer__links">
                    {FOOTER_LINKS
                        .into_iter()
                        .map(|label| view! { <button class="site-footer__link" type="button">{label}</button> })
                        .collect_view()}
                </div>
            </div>
            <div class="site-footer__legal">"© 2025 Industrial-AI.One Engineering."</div>
        </footer>
    }
}
