use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

#[test]
fn spectrum_has_forty_bars_every_time() {
    let mut rng = SmallRng::seed_from_u64(1);
    for _ in 0..5 {
        assert_eq!(spectrum_bars(&mut rng).len(), 40);
    }
    assert_eq!(SPECTRUM_BAR_COUNT, 40);
}

#[test]
fn load_has_twenty_four_bars_every_time() {
    let mut rng = SmallRng::seed_from_u64(2);
    for _ in 0..5 {
        assert_eq!(load_bars(&mut rng).len(), 24);
    }
    assert_eq!(LOAD_BAR_COUNT, 24);
}

#[test]
fn spectrum_values_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(3);
    for bar in spectrum_bars(&mut rng) {
        assert!((20.0..=80.0).contains(&bar.height_pct), "height {}", bar.height_pct);
        assert!((0.6..=1.0).contains(&bar.opacity), "opacity {}", bar.opacity);
    }
}

#[test]
fn spectrum_marks_tail_as_hot() {
    let mut rng = SmallRng::seed_from_u64(4);
    let bars = spectrum_bars(&mut rng);
    assert!(bars[..=30].iter().all(|b| !b.hot));
    assert!(bars[31..].iter().all(|b| b.hot));
    assert_eq!(bars.iter().filter(|b| b.hot).count(), 9);
}

#[test]
fn load_peak_hours_are_shaved() {
    let mut rng = SmallRng::seed_from_u64(5);
    let bars = load_bars(&mut rng);
    for (i, bar) in bars.iter().enumerate() {
        if (17..=19).contains(&i) {
            assert!(bar.peak);
            assert!((18.0..=48.0).contains(&bar.height_pct), "peak height {}", bar.height_pct);
        } else {
            assert!(!bar.peak);
            assert!((30.0..=80.0).contains(&bar.height_pct), "height {}", bar.height_pct);
        }
    }
}

#[test]
fn successive_renders_regenerate_values() {
    let mut rng = SmallRng::seed_from_u64(6);
    let first = spectrum_bars(&mut rng);
    let second = spectrum_bars(&mut rng);
    assert_ne!(first, second);
}

#[test]
fn render_rng_produces_full_charts() {
    assert_eq!(spectrum_bars(&mut render_rng()).len(), SPECTRUM_BAR_COUNT);
    assert_eq!(load_bars(&mut render_rng()).len(), LOAD_BAR_COUNT);
}
