//! Module 01 page: visual defect inspection. Also hosts the module selector.

use leptos::prelude::*;

use super::Hero;
use crate::components::accordion::Accordion;
use crate::components::code_snippet::CodeSnippet;
use crate::components::dashboard_mockup::DashboardMockup;
use crate::components::feature_row::FeatureRow;
use crate::components::module_tile::ModuleTile;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::stat_box::StatBox;
use crate::content::snippets::{EDGE_INFERENCE, FABRIC_TRAINER};
use crate::content::tiles::MODULE_TILES;
use crate::state::nav::Module;
use crate::util::theme::{ThemeRegistry, ThemeVariant};

#[component]
pub fn QcVisionPage(on_navigate: Callback<Module>) -> impl IntoView {
    let registry = expect_context::<ThemeRegistry>();
    let dark = registry.style_for(ThemeVariant::Dark);
    let light = registry.style_for(ThemeVariant::Light);

    view! {
        <div class="page">
            <Hero
                eyebrow="The Platform"
                lede="A unified neural infrastructure for the modern factory. Three interconnected modules operating at the edge."
            >
                "Total" <br/> "Factory" <br/> <span class="accent">"Autonomy"</span>
            </Hero>

            <section class="section section--white" style=light.clone()>
                <SectionHeader
                    number=0
                    title="The Triad"
                    subtitle="Select a module to explore the architecture."
                    theme=ThemeVariant::Light
                />
                <div class="grid grid--thirds">
                    {MODULE_TILES
                        .into_iter()
                        .map(|tile| view! { <ModuleTile tile=tile on_select=on_navigate/> })
                        .collect_view()}
                </div>
            </section>

            <section class="section section--ruled" style=dark.clone()>
                <span class="mono-caption accent section__kicker">"Module 01 Focus"</span>
                <SectionHeader number=1 title="The Neural Core"/>
                <Reveal>
                    <div class="feature-list">
                        <FeatureRow
                            title="Data Engine"
                            description="Automated ingestion with version control. Includes class balancing via WeightedRandomSampler and synthetic defect generation using MixUp/CutMix strategies."
                            tags=&["Albumentations", "OpenCV", "JSON Annotations"]
                        />
                        <FeatureRow
                            title="MicroViT Architecture"
                            description="Custom lightweight Vision Transformer optimized for edge latency. Features efficient patch embedding and linear attention mechanisms for O(N) complexity."
                            tags=&["PyTorch", "Transformer", "Attention"]
                        />
                        <FeatureRow
                            title="Advanced Training"
                            description="Mixed precision (FP16/BF16) training loop with Gradient Accumulation, dynamic loss scaling, and distributed training support (DDP)."
                            tags=&["AMP", "Gradient Clipping", "DDP"]
                        />
                    </div>

                    <div class="grid grid--halves">
                        <div class="stack">
                            <h3 class="block-title">"Trainer Implementation"</h3>
                            <p class="muted">"Core training loop supporting accumulation & mixed precision."</p>
                            <Accordion title="FabricDefectTrainer.py">
                                <CodeSnippet code=FABRIC_TRAINER/>
                            </Accordion>
                        </div>

                        <div class="model-card">
                            <span class="model-card__glyph accent" aria-hidden="true">"▦"</span>
                            <h3 class="model-card__name">"MicroViT Tiny"</h3>
                            <p class="model-card__score">"99.2%"</p>
                            <p class="mono-caption">"Validation Accuracy"</p>
                            <div class="model-card__rule"></div>
                            <div class="model-card__figures">
                                <div>
                                    <p class="model-card__figure">"3.2M"</p>
                                    <p class="muted small">"Params"</p>
                                </div>
                                <div>
                                    <p class="model-card__figure">"12ms"</p>
                                    <p class="muted small">"Latency"</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section" style=light.clone()>
                <SectionHeader number=2 title="Edge Deployment" theme=ThemeVariant::Light/>
                <Reveal>
                    <div class="grid grid--thirds">
                        <StatBox label="Quantization" value="INT8" sub="Dynamic / Static" icon="▣" theme=ThemeVariant::Light/>
                        <StatBox label="Export Format" value="ONNX" sub="Opset 17" icon="⎘" theme=ThemeVariant::Light/>
                        <StatBox label="Runtime" value="ORT" sub="Optimized" icon="⚙" theme=ThemeVariant::Light/>
                    </div>

                    <div class="panel grid grid--split">
                        <div class="stack">
                            <h3 class="block-title block-title--large">"Hardware Agnostic"</h3>
                            <p class="muted">
                                "Our " <code>"EdgeInferenceEngine"</code>
                                " abstracts hardware specifics, automatically selecting the optimal execution provider (CUDA, TensorRT, OpenVINO, or NNAPI) based on the available accelerator."
                            </p>
                            <ul class="device-list">
                                <li class="device-list__item">
                                    <span class="device-list__icon accent" aria-hidden="true">"▤"</span>
                                    <div>
                                        <h4>"Raspberry Pi 4/5"</h4>
                                        <p class="muted small">"ARM NEON + GPIO Triggers"</p>
                                    </div>
                                </li>
                                <li class="device-list__item">
                                    <span class="device-list__icon accent" aria-hidden="true">"▯"</span>
                                    <div>
                                        <h4>"Android Mobile"</h4>
                                        <p class="muted small">"ONNX Runtime Mobile + Kotlin"</p>
                                    </div>
                                </li>
                            </ul>
                        </div>
                        <div>
                            <Accordion title="Edge Inference (Python)" theme=ThemeVariant::Light>
                                <CodeSnippet code=EDGE_INFERENCE/>
                            </Accordion>
                        </div>
                    </div>
                </Reveal>
            </section>

            <section class="section section--ruled" style=dark>
                <SectionHeader number=3 title="Production Intelligence"/>
                <Reveal>
                    <div class="grid grid--split">
                        <div class="stack stack--loose">
                            <div class="stack">
                                <span class="block-glyph accent" aria-hidden="true">"▥"</span>
                                <h3 class="block-title block-title--large">"Metric Collection"</h3>
                                <p class="muted">"Automatic tracking of inference latency, defect distribution, and confidence scores."</p>
                            </div>
                            <div class="stack">
                                <span class="block-glyph accent" aria-hidden="true">"⚠"</span>
                                <h3 class="block-title block-title--large">"Alert System"</h3>
                                <p class="muted">"Multi-channel notification dispatch (Webhook, Email, SMS) for critical defects."</p>
                            </div>
                        </div>
                        <DashboardMockup/>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
