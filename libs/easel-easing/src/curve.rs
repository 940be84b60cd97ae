use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EasingError;

const BACK_OVERSHOOT: f32 = 1.70158;

/// The acceleration profile underneath an [`Easing`](crate::Easing).
///
/// Shapes are evaluated on a raw fraction and are not clamped, so `Back` and
/// `Elastic` style curves overshoot outside `0.0..=1.0` on purpose.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveShape {
    Linear,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Back,
    Elastic,
    /// Always zero.
    None,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInBack,
    EaseOutBack,
    BounceOut,
    EaseOutElastic,
}

impl CurveShape {
    pub const ALL: [CurveShape; 14] = [
        CurveShape::Linear,
        CurveShape::Quadratic,
        CurveShape::Cubic,
        CurveShape::Quartic,
        CurveShape::Quintic,
        CurveShape::Back,
        CurveShape::Elastic,
        CurveShape::None,
        CurveShape::EaseOutCubic,
        CurveShape::EaseInOutCubic,
        CurveShape::EaseInBack,
        CurveShape::EaseOutBack,
        CurveShape::BounceOut,
        CurveShape::EaseOutElastic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurveShape::Linear => "linear",
            CurveShape::Quadratic => "quadratic",
            CurveShape::Cubic => "cubic",
            CurveShape::Quartic => "quartic",
            CurveShape::Quintic => "quintic",
            CurveShape::Back => "back",
            CurveShape::Elastic => "elastic",
            CurveShape::None => "none",
            CurveShape::EaseOutCubic => "ease_out_cubic",
            CurveShape::EaseInOutCubic => "ease_in_out_cubic",
            CurveShape::EaseInBack => "ease_in_back",
            CurveShape::EaseOutBack => "ease_out_back",
            CurveShape::BounceOut => "bounce_out",
            CurveShape::EaseOutElastic => "ease_out_elastic",
        }
    }

    /// Evaluates the shape at `t`.
    ///
    /// Total over every `f32`, nothing is clamped. Values outside `0.0..=1.0`
    /// extrapolate the closed form.
    #[inline]
    pub fn evaluate(self, t: f32) -> f32 {
        match self {
            CurveShape::Linear => t,
            CurveShape::Quadratic => t * t,
            CurveShape::Cubic => t * t * t,
            CurveShape::Quartic => {
                let t2 = t * t;
                t2 * t2
            }
            CurveShape::Quintic => {
                let t2 = t * t;
                t2 * t2 * t
            }
            CurveShape::Back => {
                let t2 = t * t;
                let t3 = t2 * t;
                t3 + t2 - t
            }
            CurveShape::Elastic => {
                let t2 = t * t;
                let t3 = t2 * t;
                let scale = t2 * (2.0 * t3 + t2 - 4.0 * t + 2.0);
                let wave = -(t * 3.5 * PI).sin();
                scale * wave
            }
            CurveShape::None => 0.0,
            CurveShape::EaseOutCubic => {
                let t2 = t - 1.0;
                1.0 + t2 * t2 * t2
            }
            CurveShape::EaseInOutCubic => {
                let t2 = 2.0 * t;
                if t2 < 1.0 {
                    return (t2 * t2 * t2) / 2.0;
                }
                let t3 = t2 - 2.0;
                (2.0 + t3 * t3 * t3) / 2.0
            }
            CurveShape::EaseInBack => t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT),
            CurveShape::EaseOutBack => {
                let t3 = t - 1.0;
                t3 * t3 * ((BACK_OVERSHOOT + 1.0) * t3 + BACK_OVERSHOOT) + 1.0
            }
            CurveShape::BounceOut => bounce_out(t),
            CurveShape::EaseOutElastic => {
                let offset = 0.3f32 / 4.0;
                // The frequency is worked out in double precision, then narrowed.
                let frequency = (2.0 * PI as f64 / 0.3) as f32;
                2f32.powf(-10.0 * t) * ((t - offset) * frequency).sin() + 1.0
            }
        }
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if (t as f64) < 2.5 / 2.75 {
        // this threshold is a double literal
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveShape {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurveShape::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EasingError::UnknownCurve(s.to_string()))
    }
}
