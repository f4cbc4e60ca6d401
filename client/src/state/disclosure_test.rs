use super::*;

#[test]
fn disclosure_starts_collapsed() {
    assert!(!Disclosure::default().expanded);
}

#[test]
fn four_activations_alternate_open_and_closed() {
    let mut d = Disclosure::default();
    let mut seen = Vec::new();
    for _ in 0..4 {
        d.toggle();
        seen.push(d.expanded);
    }
    assert_eq!(seen, vec![true, false, true, false]);
}

#[test]
fn instances_are_independent() {
    let mut a = Disclosure::default();
    let b = Disclosure::default();
    a.toggle();
    assert!(a.expanded);
    assert!(!b.expanded);
}
