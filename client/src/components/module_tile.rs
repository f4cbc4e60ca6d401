//! Clickable module selector card.

use leptos::prelude::*;

use crate::content::tiles::ModuleTileCopy;
use crate::state::nav::Module;

#[component]
pub fn ModuleTile(tile: ModuleTileCopy, on_select: Callback<Module>) -> impl IntoView {
    let module = tile.module;

    view! {
        <div class="module-tile" role="button" tabindex="0" on:click=move |_| on_select.run(module)>
            <div class="module-tile__top">
                <span class="module-tile__glyph" aria-hidden="true">{tile.glyph}</span>
                <span class="module-tile__index">{format!("Module {:02}", module.ordinal())}</span>
            </div>
            <h3 class="module-tile__name">{module.name()}</h3>
            <p class="module-tile__blurb">{tile.blurb}</p>
            <div class="module-tile__cta">"Deep Dive →"</div>
        </div>
    }
}
