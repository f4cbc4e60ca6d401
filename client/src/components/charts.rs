//! Decorative bar charts. Values are random and regenerated per render.

use leptos::prelude::*;

use crate::util::bars::{load_bars, render_rng, spectrum_bars};

#[component]
pub fn SpectralHeatmap() -> impl IntoView {
    let bars = spectrum_bars(&mut render_rng());

    view! {
        <div class="chart chart--spectrum">
            <div class="chart__caption accent">"SPECTRUM ANALYSIS"</div>
            <div class="chart__bars chart__bars--tight">
                {bars
                    .into_iter()
                    .map(|bar| {
                        let style = format!(
                            "height: {:.1}%; opacity: {:.2};",
                            bar.height_pct, bar.opacity
                        );
                        view! {
                            <div class="chart__bar" class=("chart__bar--hot", bar.hot) style=style></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn LoadShiftDiagram() -> impl IntoView {
    let bars = load_bars(&mut render_rng());

    view! {
        <div class="chart chart--load">
            <div class="chart__caption accent">"LOAD OPTIMIZATION"</div>
            <div class="chart__bars">
                {bars
                    .into_iter()
                    .map(|bar| {
                        let style = format!("height: {:.1}%;", bar.height_pct);
                        view! {
                            <div class="chart__bar" class=("chart__bar--peak", bar.peak) style=style></div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="chart__footnote">"24H CYCLE"</div>
        </div>
    }
}
