//! Static "live feed" panel for the QC Vision monitoring section.

use leptos::prelude::*;

use crate::content::inspection::{InspectionRow, QC_INSPECTIONS};

#[component]
pub fn DashboardMockup() -> impl IntoView {
    view! {
        <div class="dashboard-mockup">
            <div class="dashboard-mockup__glow"></div>
            <div class="dashboard-mockup__header">
                <div>
                    <h3 class="mono-caption accent">"LIVE FEED"</h3>
                    <h2 class="dashboard-mockup__station">"Line-A / Inspection Station 04"</h2>
                </div>
                <div class="dashboard-mockup__yield">
                    <div class="dashboard-mockup__yield-value">"99.8%"</div>
                    <div class="mono-caption">"YIELD"</div>
                </div>
            </div>
            <div class="dashboard-mockup__rows">
                {QC_INSPECTIONS.into_iter().map(inspection_row).collect_view()}
            </div>
        </div>
    }
}

fn inspection_row(row: InspectionRow) -> impl IntoView {
    view! {
        <div class="dashboard-mockup__row">
            <div class="dashboard-mockup__camera">{row.camera_id}</div>
            <div class="dashboard-mockup__category">{row.category}</div>
            <div class="confidence-bar">
                <div class="confidence-bar__fill" style=row.confidence_style()></div>
            </div>
            <div class="dashboard-mockup__status">
                <span class=row.status.badge_class()>{row.status.label()}</span>
            </div>
        </div>
    }
}
