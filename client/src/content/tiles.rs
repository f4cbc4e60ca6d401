//! Module selector tiles for "The Triad" section.

use crate::state::nav::Module;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModuleTileCopy {
    pub module: Module,
    pub glyph: &'static str,
    pub blurb: &'static str,
}

pub const MODULE_TILES: [ModuleTileCopy; 3] = [
    ModuleTileCopy {
        module: Module::QcVision,
        glyph: "◉",
        blurb: "The Eyes. 100% visual defect detection at 300ft/min using MicroViT.",
    },
    ModuleTileCopy {
        module: Module::FailPredict,
        glyph: "∿",
        blurb: "The Pulse. Vibration analysis that predicts machine failure weeks in advance.",
    },
    ModuleTileCopy {
        module: Module::PowerGuard,
        glyph: "ϟ",
        blurb: "The Metabolism. Real-time energy optimization and anomaly detection.",
    },
];
