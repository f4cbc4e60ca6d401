//! Bar values for the two decorative chart mockups.
//!
//! The charts illustrate the copy; no value comes from a data source.
//! Values are regenerated every time a chart component renders.

#[cfg(test)]
#[path = "bars_test.rs"]
mod bars_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub const SPECTRUM_BAR_COUNT: usize = 40;
pub const LOAD_BAR_COUNT: usize = 24;

/// Spectrum bars past this index are drawn in the alarm colour.
pub const SPECTRUM_HOT_AFTER: usize = 30;
/// Hours of the load chart that get shaved (drawn grey, scaled down).
pub const LOAD_PEAK_HOURS: std::ops::RangeInclusive<usize> = 17..=19;
pub const LOAD_PEAK_SCALE: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumBar {
    pub height_pct: f64,
    pub opacity: f64,
    pub hot: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadBar {
    pub height_pct: f64,
    pub peak: bool,
}

#[must_use]
pub fn spectrum_bars<R: Rng>(rng: &mut R) -> Vec<SpectrumBar> {
    (0..SPECTRUM_BAR_COUNT)
        .map(|i| SpectrumBar {
            height_pct: 20.0 + rng.random::<f64>() * 60.0,
            opacity: 0.6 + rng.random::<f64>() * 0.4,
            hot: i > SPECTRUM_HOT_AFTER,
        })
        .collect()
}

#[must_use]
pub fn load_bars<R: Rng>(rng: &mut R) -> Vec<LoadBar> {
    (0..LOAD_BAR_COUNT)
        .map(|i| {
            let base = 30.0 + rng.random::<f64>() * 50.0;
            let peak = LOAD_PEAK_HOURS.contains(&i);
            LoadBar { height_pct: if peak { base * LOAD_PEAK_SCALE } else { base }, peak }
        })
        .collect()
}

/// Fresh generator for one chart render.
#[must_use]
pub fn render_rng() -> SmallRng {
    SmallRng::seed_from_u64(render_seed())
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

#[cfg(not(feature = "hydrate"))]
#[allow(clippy::cast_possible_truncation)]
fn render_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
