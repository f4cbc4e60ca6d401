//! Module 02 page: vibration-based failure prediction.

use leptos::prelude::*;

use super::Hero;
use crate::components::accordion::Accordion;
use crate::components::charts::SpectralHeatmap;
use crate::components::code_snippet::CodeSnippet;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::stat_box::StatBox;
use crate::content::snippets::RUL_PREDICTOR;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

const SIGNAL_PATH: [(&str, &str); 4] = [
    ("1. Acquisition", "MPU-6050 @ 100Hz"),
    ("2. Transformation", "Fast Fourier Transform"),
    ("3. Feature Eng", "Spectral Entropy"),
    ("4. Inference", "RUL Regression"),
];

#[component]
pub fn FailPredictPage() -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();
    let dark = registry.style_for(ThemeVariant::Dark);
    let light = registry.style_for(ThemeVariant::Light);
    let last_step = SIGNAL_PATH.len() - 1;

    view! {
        <div class="page">
            <Hero
                eyebrow="Module 02"
                lede="Machines speak a language of vibration. FailPredict listens to these whispers at 100Hz, predicting the end of life with 89% accuracy."
            >
                "Silence" <br/> "Before" <br/> <span class="accent">"Failure"</span>
            </Hero>

            <section class="section" style=light>
                <Reveal>
                    <h2 class="section__lead">"The Pulse of the Machine"</h2>
                    <div class="grid grid--halves">
                        <div class="stack">
                            <p class="prose">
                                "Reactive maintenance (\"fixing it when it breaks\") is the most expensive strategy in manufacturing. "
                                "Scheduled maintenance (\"fixing it whether it needs it or not\") is wasteful."
                            </p>
                            <p class="prose">
                                "We utilize " <strong>"Condition-Based Maintenance (CBM)"</strong>
                                ". By fusing 3-axis acceleration data with temperature readings, we construct a multidimensional health index."
                            </p>
                        </div>
                        <div class="grid grid--pairs">
                            <StatBox value="100Hz" label="Sampling" theme=ThemeVariant::Light/>
                            <StatBox value="120h" label="Warning" theme=ThemeVariant::Light/>
                            <StatBox value="<$90" label="Hardware Cost" theme=ThemeVariant::Light/>
                            <StatBox value="MPU" label="Sensor Core" theme=ThemeVariant::Light/>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section section--ruled" style=dark.clone()>
                <SectionHeader number=1 title="Prediction Engine"/>
                <Reveal>
                    <div class="grid grid--split">
                        <div class="stack">
                            <h3 class="block-title block-title--large accent">"Stacked GRU Network"</h3>
                            <p class="muted">
                                "Vibration data is temporal. We employ a Gated Recurrent Unit (GRU) network trained on the NASA CMAPSS dataset to model temporal degradation."
                            </p>
                            <div class="signal-path">
                                <h4 class="signal-path__title">
                                    <span class="accent" aria-hidden="true">"∿"</span>
                                    " Signal Path"
                                </h4>
                                <ul class="signal-path__steps">
                                    {SIGNAL_PATH
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, (step, detail))| {
                                            view! {
                                                <li class="signal-path__step">
                                                    <span>{step}</span>
                                                    <span class="signal-path__detail" class=("accent", i == last_step)>
                                                        {detail}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        </div>
                        <div>
                            <Accordion title="Model Architecture (PyTorch)">
                                <CodeSnippet code=RUL_PREDICTOR/>
                            </Accordion>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section section--ruled" style=dark>
                <SectionHeader number=2 title="Health Monitor"/>
                <Reveal>
                    <div class="panel panel--dark">
                        <div class="panel__header">
                            <div>
                                <h3 class="mono-caption accent">"ASSET: SEW-A-001"</h3>
                                <h2 class="panel__title">"Main Drive Bearing"</h2>
                            </div>
                            <div class="panel__figure">
                                <div class="panel__figure-value">"342h"</div>
                                <div class="mono-caption">"REMAINING LIFE"</div>
                            </div>
                        </div>
                        <SpectralHeatmap/>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
