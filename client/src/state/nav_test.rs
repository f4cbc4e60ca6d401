use super::*;

// =============================================================
// Module
// =============================================================

#[test]
fn module_default_is_qc_vision() {
    assert_eq!(Module::default(), Module::QcVision);
    assert_eq!(Module::ALL[0], Module::QcVision);
}

#[test]
fn module_slugs_round_trip() {
    for module in Module::ALL {
        assert_eq!(Module::from_slug(module.slug()), Some(module));
    }
    assert_eq!(Module::from_slug("unknown"), None);
    assert_eq!(Module::from_slug("QC-VISION"), None);
}

#[test]
fn module_labels_replace_hyphen_with_space() {
    for module in Module::ALL {
        assert_eq!(module.label(), module.slug().replacen('-', " ", 1));
    }
    assert_eq!(Module::QcVision.label(), "qc vision");
}

#[test]
fn module_ordinals_follow_nav_order() {
    let ordinals: Vec<u8> = Module::ALL.iter().map(|m| m.ordinal()).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);
}

#[test]
fn module_names() {
    assert_eq!(Module::QcVision.name(), "QC Vision");
    assert_eq!(Module::FailPredict.name(), "FailPredict");
    assert_eq!(Module::PowerGuard.name(), "PowerGuard");
}

// =============================================================
// NavState
// =============================================================

#[test]
fn nav_state_starts_on_first_module_with_menu_closed() {
    let state = NavState::default();
    assert_eq!(state.page, Module::QcVision);
    assert!(!state.menu_open);
    assert_eq!(state.scroll_reset_seq, 0);
}

#[test]
fn navigate_sets_page_and_closes_menu_from_any_state() {
    for start_page in Module::ALL {
        for menu_open in [false, true] {
            for target in Module::ALL {
                let mut state = NavState { page: start_page, menu_open, scroll_reset_seq: 5 };
                state.navigate(target);
                assert_eq!(state.page, target);
                assert!(!state.menu_open);
                assert_eq!(state.scroll_reset_seq, 6);
            }
        }
    }
}

#[test]
fn navigate_to_current_page_still_requests_scroll_reset() {
    let mut state = NavState::default();
    state.navigate(Module::QcVision);
    assert_eq!(state.page, Module::QcVision);
    assert_eq!(state.scroll_reset_seq, 1);
}

#[test]
fn toggle_menu_flips_flag_without_touching_page() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    assert_eq!(state.page, Module::QcVision);
    assert_eq!(state.scroll_reset_seq, 0);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn selecting_second_tile_opens_failpredict_and_resets_scroll() {
    let mut state = NavState::default();
    let before = state.scroll_reset_seq;

    let second = Module::ALL[1];
    state.navigate(second);

    assert_eq!(state.page, Module::FailPredict);
    assert!(crate::util::scroll::should_reset(Some(before), state.scroll_reset_seq));
}
