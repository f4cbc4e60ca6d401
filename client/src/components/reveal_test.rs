use super::*;

#[test]
fn hidden_wrapper_has_only_base_class() {
    assert_eq!(transition_class("reveal", false, ""), "reveal");
}

#[test]
fn visible_wrapper_adds_modifier() {
    assert_eq!(transition_class("reveal", true, ""), "reveal reveal--visible");
    assert_eq!(transition_class("fade-in", true, ""), "fade-in fade-in--visible");
}

#[test]
fn extra_classes_are_appended_trimmed() {
    assert_eq!(transition_class("reveal", false, "  stack "), "reveal stack");
    assert_eq!(transition_class("reveal", true, "stack"), "reveal reveal--visible stack");
}

#[test]
fn delay_style_uses_milliseconds() {
    assert_eq!(transition_delay_style(0), "transition-delay: 0ms;");
    assert_eq!(transition_delay_style(300), "transition-delay: 300ms;");
}
