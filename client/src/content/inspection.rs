//! Mock inspection feed shown in the QC Vision dashboard.

#[cfg(test)]
#[path = "inspection_test.rs"]
mod inspection_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InspectionStatus {
    Pass,
    Major,
    Critical,
}

impl InspectionStatus {
    /// Badge text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Major => "MAJOR",
            Self::Critical => "CRITICAL",
        }
    }

    /// BEM modifier class for the badge colour.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Pass => "status-badge status-badge--pass",
            Self::Major => "status-badge status-badge--major",
            Self::Critical => "status-badge status-badge--critical",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InspectionRow {
    pub camera_id: &'static str,
    pub category: &'static str,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    pub status: InspectionStatus,
}

impl InspectionRow {
    /// Inline width for the confidence bar.
    #[must_use]
    pub fn confidence_style(&self) -> String {
        format!("width: {}%;", confidence_percent(self.confidence))
    }
}

/// Confidence as a whole percentage, clamped to `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() as u8
}

pub const QC_INSPECTIONS: [InspectionRow; 3] = [
    InspectionRow { camera_id: "CAM-01", category: "Oil Stain", confidence: 0.98, status: InspectionStatus::Critical },
    InspectionRow { camera_id: "CAM-03", category: "Stitch err", confidence: 0.87, status: InspectionStatus::Major },
    InspectionRow { camera_id: "CAM-02", category: "No Defect", confidence: 0.99, status: InspectionStatus::Pass },
];
