use super::*;

#[test]
fn status_labels() {
    assert_eq!(InspectionStatus::Pass.label(), "PASS");
    assert_eq!(InspectionStatus::Major.label(), "MAJOR");
    assert_eq!(InspectionStatus::Critical.label(), "CRITICAL");
}

#[test]
fn status_badges_are_distinct() {
    let classes = [
        InspectionStatus::Pass.badge_class(),
        InspectionStatus::Major.badge_class(),
        InspectionStatus::Critical.badge_class(),
    ];
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert!(classes.iter().all(|c| c.starts_with("status-badge ")));
}

#[test]
fn feed_matches_station_rows() {
    let ids: Vec<&str> = QC_INSPECTIONS.iter().map(|r| r.camera_id).collect();
    assert_eq!(ids, vec!["CAM-01", "CAM-03", "CAM-02"]);
    assert_eq!(QC_INSPECTIONS[0].status, InspectionStatus::Critical);
    assert_eq!(QC_INSPECTIONS[2].category, "No Defect");
}

#[test]
fn confidences_are_fractions() {
    assert!(QC_INSPECTIONS.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
}

#[test]
fn confidence_percent_rounds_and_clamps() {
    assert_eq!(confidence_percent(0.98), 98);
    assert_eq!(confidence_percent(0.875), 88);
    assert_eq!(confidence_percent(1.7), 100);
    assert_eq!(confidence_percent(-0.2), 0);
}

#[test]
fn confidence_style_sets_bar_width() {
    assert_eq!(QC_INSPECTIONS[1].confidence_style(), "width: 87%;");
}
