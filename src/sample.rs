use std::fmt::Write;

use serde::Serialize;

use easel_easing::Easing;

/// Which evaluation entry point a sampler drives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mode {
    Apply,
    Clamp,
    Range { start: f32, range: f32 },
    RangeClamp { start: f32, range: f32 },
}

impl Mode {
    pub fn new(start: Option<f32>, range: f32, clamp: bool) -> Mode {
        match (start, clamp) {
            (None, false) => Mode::Apply,
            (None, true) => Mode::Clamp,
            (Some(start), false) => Mode::Range { start, range },
            (Some(start), true) => Mode::RangeClamp { start, range },
        }
    }

    fn evaluate(self, easing: &Easing, time: f32, duration: f32) -> f32 {
        match self {
            Mode::Apply => easing.apply(time, duration),
            Mode::Clamp => easing.apply_clamp(time, duration),
            Mode::Range { start, range } => easing.apply_range(start, range, time, duration),
            Mode::RangeClamp { start, range } => easing.apply_range_clamp(start, range, time, duration),
        }
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub time: f32,
    pub value: f32,
}

/// Samples `easing` at `steps + 1` evenly spaced times from `0` to `duration`.
pub fn sample(easing: &Easing, mode: Mode, duration: f32, steps: u32) -> Vec<Sample> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let time = duration * i as f32 / steps as f32;
            Sample {
                time,
                value: mode.evaluate(easing, time, duration),
            }
        })
        .collect()
}

pub fn render_table(easing: &Easing, samples: &[Sample]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} / {}, strength {})",
        easing,
        easing.taper(),
        easing.shape(),
        easing.strength()
    );
    for sample in samples {
        let _ = writeln!(out, "{:>10.4} {:>12.6}", sample.time, sample.value);
    }
    out
}

pub fn render_catalog() -> String {
    let mut out = String::new();
    for easing in Easing::PRESETS {
        let _ = writeln!(out, "{:<24} {:<8} {}", easing.name(), easing.taper(), easing.shape());
    }
    out
}
