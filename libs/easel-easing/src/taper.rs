use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::curve::CurveShape;
use crate::error::EasingError;

/// How a [`CurveShape`] is mirrored over time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaperMode {
    /// Slow start.
    In,
    /// Slow end.
    Out,
    /// Slow start and end, mirrored around the midpoint.
    InOut,
    /// The raw curve, fed `duration / time` by [`Easing::apply`](crate::Easing::apply).
    None,
}

impl TaperMode {
    pub const ALL: [TaperMode; 4] = [TaperMode::In, TaperMode::Out, TaperMode::InOut, TaperMode::None];

    pub fn name(self) -> &'static str {
        match self {
            TaperMode::In => "in",
            TaperMode::Out => "out",
            TaperMode::InOut => "in_out",
            TaperMode::None => "none",
        }
    }

    /// Composes `shape` at the fraction `t` according to this taper.
    #[inline]
    pub fn compose(self, shape: CurveShape, t: f32) -> f32 {
        match self {
            TaperMode::In | TaperMode::None => shape.evaluate(t),
            TaperMode::Out => 1.0 - shape.evaluate(1.0 - t),
            TaperMode::InOut => {
                if t < 0.5 {
                    shape.evaluate(2.0 * t) / 2.0
                } else {
                    1.0 - shape.evaluate(2.0 - 2.0 * t) / 2.0
                }
            }
        }
    }
}

impl fmt::Display for TaperMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaperMode {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaperMode::ALL
            .into_iter()
            .find(|taper| taper.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EasingError::UnknownTaper(s.to_string()))
    }
}
