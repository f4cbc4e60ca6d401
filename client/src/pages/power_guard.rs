//! Module 03 page: energy anomaly detection and load shifting.

use leptos::prelude::*;

use super::Hero;
use crate::components::accordion::Accordion;
use crate::components::charts::LoadShiftDiagram;
use crate::components::code_snippet::CodeSnippet;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::stat_box::StatBox;
use crate::content::snippets::POWER_DETECTOR;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

#[component]
pub fn PowerGuardPage() -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();
    let dark = registry.style_for(ThemeVariant::Dark);
    let light = registry.style_for(ThemeVariant::Light);

    view! {
        <div class="page page--light">
            <Hero
                eyebrow="Module 03"
                lede="PowerGuard creates a digital twin of your factory's electrical consumption, detecting anomalies and optimizing for industrial tariff structures in real-time."
                theme=ThemeVariant::Light
            >
                "Invisible" <br/> <span class="accent">"Waste"</span> <br/> "Visible"
            </Hero>

            <section class="section" style=dark>
                <Reveal>
                    <h2 class="section__lead">"Factory Metabolism"</h2>
                    <div class="grid grid--halves">
                        <div>
                            <p class="prose">
                                "Hidden within the noise of motors and compressors are phantom loads and efficiency losses. "
                                "PowerGuard uses Unsupervised Learning to learn the \"normal\" electrical signature of your facility."
                            </p>
                        </div>
                        <div class="grid grid--pairs">
                            <StatBox value="18%" label="Savings"/>
                            <StatBox value="<200ms" label="Anomaly Detect"/>
                            <StatBox value="PZEM" label="Sensor Core"/>
                            <StatBox value="TS2Vec" label="Model Arch"/>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section section--ruled" style=light.clone()>
                <SectionHeader number=1 title="Anomaly Detection" theme=ThemeVariant::Light/>
                <Reveal>
                    <div class="grid grid--split">
                        <div class="stack">
                            <h3 class="block-title block-title--large accent">"TS2Vec + Ruptures"</h3>
                            <p class="muted">
                                "We use TS2Vec to convert time-series power data into dense vector representations, allowing us to compare the \"shape\" of power usage, not just the amplitude."
                            </p>
                            <ul class="signal-path__steps signal-path__steps--ruled">
                                <li class="signal-path__step">
                                    <span>"Algorithm"</span>
                                    <span class="signal-path__detail">"Unsupervised Contrastive"</span>
                                </li>
                                <li class="signal-path__step">
                                    <span>"Sensitivity"</span>
                                    <span class="signal-path__detail">"Adaptive Threshold"</span>
                                </li>
                            </ul>
                        </div>
                        <div>
                            <Accordion title="Anomaly Logic (Python)" theme=ThemeVariant::Light>
                                <CodeSnippet code=POWER_DETECTOR/>
                            </Accordion>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section" style=light>
                <SectionHeader number=2 title="Load Intelligence" theme=ThemeVariant::Light/>
                <Reveal>
                    <div class="panel panel--raised">
                        <div class="panel__header">
                            <div>
                                <h3 class="mono-caption accent">"FACTORY MAIN FEED"</h3>
                                <h2 class="panel__title">"Peak Shaving Optimization"</h2>
                            </div>
                            <div class="panel__figure">
                                <div class="panel__figure-value">"-18%"</div>
                                <div class="mono-caption">"SAVINGS"</div>
                            </div>
                        </div>
                        <LoadShiftDiagram/>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
