use std::fmt;
use std::str::FromStr;

use crate::curve::CurveShape;
use crate::error::EasingError;
use crate::taper::TaperMode;

/// An immutable easing: a taper mode, a curve shape and a strength blending
/// the eased result back toward linear.
///
/// The ready-made values live as associated constants (see
/// [`Easing::PRESETS`]). Derive a variant with a custom strength through
/// [`Easing::with_strength`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Easing {
    name: &'static str,
    taper: TaperMode,
    shape: CurveShape,
    strength: f32,
}

impl Easing {
    pub(crate) const fn new(name: &'static str, taper: TaperMode, shape: CurveShape) -> Easing {
        Easing {
            name,
            taper,
            shape,
            strength: 1.0,
        }
    }

    /// Copies the taper and shape (and name) of this easing with another strength.
    ///
    /// `0.0` is pure linear, `1.0` the pure curve. Anything else extrapolates.
    pub const fn with_strength(&self, strength: f32) -> Easing {
        Easing {
            name: self.name,
            taper: self.taper,
            shape: self.shape,
            strength,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn taper(&self) -> TaperMode {
        self.taper
    }

    pub fn shape(&self) -> CurveShape {
        self.shape
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Gets the eased position of `time` along `duration`.
    ///
    /// The result is in duration units, not a `0.0..=1.0` fraction:
    /// - `time <= 0` or `duration <= 0` gives `0`
    /// - `time >= duration` gives `duration` itself
    /// - otherwise the eased fraction multiplied back by `duration`
    ///
    /// With [`TaperMode::None`] the shape is evaluated on `duration / time`
    /// with no guard, no strength blending and no rescaling. A `time` of zero
    /// yields an infinite or NaN result.
    pub fn apply(&self, time: f32, duration: f32) -> f32 {
        if self.taper == TaperMode::None {
            return self.shape.evaluate(duration / time);
        }
        if time <= 0.0 || duration <= 0.0 {
            return 0.0;
        } else if time >= duration {
            return duration;
        }

        let t = time / duration;
        let mut eased_t = self.taper.compose(self.shape, t);
        if self.strength != 1.0 {
            eased_t = self.strength * eased_t + (1.0 - self.strength) * t;
        }
        eased_t * duration
    }

    /// Clamps `time` into `0.0..=1.0` and applies.
    ///
    /// The bound does not depend on `duration`.
    pub fn apply_clamp(&self, time: f32, duration: f32) -> f32 {
        self.apply(clamp(time, 0.0, 1.0), duration)
    }

    /// Interpolates `start + range * position`, where the position is `1` for a
    /// zero `duration` and [`Easing::apply`] otherwise.
    ///
    /// The position is not normalized, so this only spans `start..start + range`
    /// when `duration` is `1`.
    pub fn apply_range(&self, start: f32, range: f32, time: f32, duration: f32) -> f32 {
        let position = if duration == 0.0 {
            1.0
        } else {
            self.apply(time, duration)
        };
        start + range * position
    }

    /// Clamps `time` into `0..=duration` and interpolates.
    ///
    /// Note the argument order handed to [`Easing::apply_range`]: `duration`
    /// goes in as the time and the clamped time as the duration.
    pub fn apply_range_clamp(&self, start: f32, range: f32, time: f32, duration: f32) -> f32 {
        self.apply_range(start, range, duration, clamp(time, 0.0, duration))
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::NONE
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::preset(s).ok_or_else(|| EasingError::UnknownPreset(s.to_string()))
    }
}

// f32::clamp panics when min > max, which a negative duration would trigger.
#[inline]
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn non_positive_inputs_give_zero() {
        assert_eq!(Easing::REGULAR_IN.apply(0.0, 10.0), 0.0);
        assert_eq!(Easing::REGULAR_OUT.apply(-1.0, 10.0), 0.0);
        assert_eq!(Easing::STRONG_IN_OUT.apply(5.0, 0.0), 0.0);
        assert_eq!(Easing::BACK_IN.apply(5.0, -2.0), 0.0);
    }

    #[test]
    fn finished_returns_duration() {
        assert_eq!(Easing::REGULAR_IN.apply(10.0, 10.0), 10.0);
        assert_eq!(Easing::ELASTIC_OUT.apply(12.0, 3.0), 3.0);
    }

    #[test]
    fn linear_shape_is_identity_under_every_taper() {
        for taper in [TaperMode::In, TaperMode::Out, TaperMode::InOut] {
            let easing = Easing::new("linear", taper, CurveShape::Linear);
            for time in [0.5f32, 2.5, 5.0, 7.25, 9.9] {
                assert_close(easing.apply(time, 10.0), time);
            }
        }
    }

    #[test]
    fn zero_strength_is_linear_for_any_shape() {
        for shape in CurveShape::ALL {
            for taper in [TaperMode::In, TaperMode::Out, TaperMode::InOut] {
                let easing = Easing::new("flat", taper, shape).with_strength(0.0);
                assert_close(easing.apply(3.0, 8.0), 3.0);
            }
        }
    }

    #[test]
    fn half_strength_blends() {
        let easing = Easing::REGULAR_IN.with_strength(0.5);
        // 0.5 * 0.25 + 0.5 * 0.5
        assert_close(easing.apply(5.0, 10.0), 3.75);
    }

    #[test]
    fn strength_extrapolates() {
        let easing = Easing::REGULAR_IN.with_strength(2.0);
        // 2 * 0.25 - 0.5
        assert_close(easing.apply(5.0, 10.0), 0.0);
    }

    #[test]
    fn in_out_is_continuous_through_apply() {
        let easing = Easing::STRONG_IN_OUT;
        let below = easing.apply(4.999, 10.0);
        let at = easing.apply(5.0, 10.0);
        assert!((below - at).abs() < 1e-2, "{below} vs {at}");
        assert_close(at, 5.0);
    }

    #[test]
    fn raw_taper_divides_duration_by_time() {
        assert_eq!(Easing::JUST_LINEAR.apply(4.0, 2.0), 0.5);
        assert_eq!(Easing::JUST_EASE_IN.apply(4.0, 2.0), 0.125);
        assert_eq!(Easing::JUST_NONE.apply(4.0, 2.0), 0.0);
        // no blending on the raw path
        assert_eq!(Easing::JUST_LINEAR.with_strength(0.0).apply(4.0, 2.0), 0.5);
    }

    #[test]
    fn raw_taper_at_zero_time_is_not_finite() {
        assert_eq!(Easing::JUST_LINEAR.apply(0.0, 2.0), f32::INFINITY);
        assert!(Easing::JUST_LINEAR.apply(0.0, 0.0).is_nan());
        assert!(!Easing::JUST_EASE_OUT.apply(0.0, 1.0).is_finite());
    }

    #[test]
    fn apply_clamp_uses_unit_bounds() {
        assert_eq!(Easing::REGULAR_IN.apply_clamp(-3.0, 1.0), 0.0);
        assert_eq!(Easing::REGULAR_IN.apply_clamp(3.0, 1.0), 1.0);
        assert_close(Easing::REGULAR_IN.apply_clamp(0.5, 1.0), 0.25);
        // a time of 5 is pulled back to 1 regardless of the duration
        assert_close(Easing::REGULAR_IN.apply_clamp(5.0, 10.0), 0.1);
    }

    #[test]
    fn apply_range_with_unit_duration() {
        assert_close(Easing::REGULAR_IN.apply_range(100.0, 50.0, 0.5, 1.0), 112.5);
        assert_eq!(Easing::REGULAR_IN.apply_range(100.0, 50.0, 0.0, 1.0), 100.0);
        assert_eq!(Easing::REGULAR_IN.apply_range(100.0, 50.0, 1.0, 1.0), 150.0);
    }

    #[test]
    fn apply_range_zero_duration_jumps_to_end() {
        assert_eq!(Easing::REGULAR_IN.apply_range(10.0, 5.0, 0.3, 0.0), 15.0);
        assert_eq!(Easing::JUST_LINEAR.apply_range(10.0, 5.0, 0.0, 0.0), 15.0);
    }

    #[test]
    fn apply_range_scales_by_duration() {
        // position is 2.5 duration units, not a quarter
        assert_close(Easing::REGULAR_IN.apply_range(0.0, 2.0, 5.0, 10.0), 5.0);
    }

    #[test]
    fn apply_range_clamp_swaps_time_and_duration() {
        let easing = Easing::REGULAR_IN;
        // clamp(3, 0, 10) = 3 becomes the duration and 10 the time: finished, position 3
        assert_eq!(easing.apply_range_clamp(1.0, 2.0, 3.0, 10.0), 7.0);
        // clamp(15, 0, 10) = 10, time 10 >= duration 10, position 10
        assert_eq!(easing.apply_range_clamp(1.0, 2.0, 15.0, 10.0), 21.0);
        // clamp(-4, 0, 10) = 0 is a zero duration, position 1
        assert_eq!(easing.apply_range_clamp(1.0, 2.0, -4.0, 10.0), 3.0);
        // a negative duration inverts the bounds without panicking: clamp gives -1,
        // and apply(-1, -1) is a non-positive time
        assert_eq!(easing.apply_range_clamp(1.0, 2.0, 3.0, -1.0), 1.0);
    }

    #[test]
    fn with_strength_keeps_identity() {
        let derived = Easing::BACK_OUT.with_strength(0.3);
        assert_eq!(derived.name(), "BACK_OUT");
        assert_eq!(derived.taper(), TaperMode::Out);
        assert_eq!(derived.shape(), CurveShape::Back);
        assert_eq!(derived.strength(), 0.3);
        assert_eq!(Easing::BACK_OUT.strength(), 1.0);
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Easing::default(), Easing::NONE);
        assert_eq!(Easing::default().to_string(), "NONE");
    }
}
