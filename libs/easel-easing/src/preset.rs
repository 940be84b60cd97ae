use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::curve::CurveShape;
use crate::easing::Easing;
use crate::taper::TaperMode;

lazy_static! {
    static ref LOOKUP: AHashMap<&'static str, Easing> = create_lookup();
}

impl Easing {
    pub const NONE: Easing = Easing::new("NONE", TaperMode::In, CurveShape::Linear);

    // Quadratic
    pub const REGULAR_IN: Easing = Easing::new("REGULAR_IN", TaperMode::In, CurveShape::Quadratic);
    pub const REGULAR_OUT: Easing = Easing::new("REGULAR_OUT", TaperMode::Out, CurveShape::Quadratic);
    pub const REGULAR_IN_OUT: Easing =
        Easing::new("REGULAR_IN_OUT", TaperMode::InOut, CurveShape::Quadratic);

    // Quintic
    pub const STRONG_IN: Easing = Easing::new("STRONG_IN", TaperMode::In, CurveShape::Quintic);
    pub const STRONG_OUT: Easing = Easing::new("STRONG_OUT", TaperMode::Out, CurveShape::Quintic);
    pub const STRONG_IN_OUT: Easing =
        Easing::new("STRONG_IN_OUT", TaperMode::InOut, CurveShape::Quintic);

    pub const BACK_IN: Easing = Easing::new("BACK_IN", TaperMode::In, CurveShape::Back);
    pub const BACK_OUT: Easing = Easing::new("BACK_OUT", TaperMode::Out, CurveShape::Back);
    pub const BACK_IN_OUT: Easing = Easing::new("BACK_IN_OUT", TaperMode::InOut, CurveShape::Back);

    pub const ELASTIC_IN: Easing = Easing::new("ELASTIC_IN", TaperMode::In, CurveShape::Elastic);
    pub const ELASTIC_OUT: Easing = Easing::new("ELASTIC_OUT", TaperMode::Out, CurveShape::Elastic);
    pub const ELASTIC_IN_OUT: Easing =
        Easing::new("ELASTIC_IN_OUT", TaperMode::InOut, CurveShape::Elastic);

    // The "just" presets evaluate the raw curve on `duration / time`.
    pub const JUST_NONE: Easing = Easing::new("JUST_NONE", TaperMode::None, CurveShape::None);
    pub const JUST_LINEAR: Easing = Easing::new("JUST_LINEAR", TaperMode::None, CurveShape::Linear);
    pub const JUST_EASE_IN: Easing = Easing::new("JUST_EASE_IN", TaperMode::None, CurveShape::Cubic);
    pub const JUST_EASE_OUT: Easing =
        Easing::new("JUST_EASE_OUT", TaperMode::None, CurveShape::EaseOutCubic);
    pub const JUST_EASE_INOUT: Easing =
        Easing::new("JUST_EASE_INOUT", TaperMode::None, CurveShape::EaseInOutCubic);
    pub const JUST_EASE_IN_BACK: Easing =
        Easing::new("JUST_EASE_IN_BACK", TaperMode::None, CurveShape::EaseInBack);
    pub const JUST_EASE_OUT_BACK: Easing =
        Easing::new("JUST_EASE_OUT_BACK", TaperMode::None, CurveShape::EaseOutBack);
    pub const JUST_BOUNCE_OUT: Easing =
        Easing::new("JUST_BOUNCE_OUT", TaperMode::None, CurveShape::BounceOut);
    pub const JUST_EASE_OUT_ELASTIC: Easing =
        Easing::new("JUST_EASE_OUT_ELASTIC", TaperMode::None, CurveShape::EaseOutElastic);

    /// Every preset, in catalog order.
    pub const PRESETS: &'static [Easing] = &[
        Easing::NONE,
        Easing::REGULAR_IN,
        Easing::REGULAR_OUT,
        Easing::REGULAR_IN_OUT,
        Easing::STRONG_IN,
        Easing::STRONG_OUT,
        Easing::STRONG_IN_OUT,
        Easing::BACK_IN,
        Easing::BACK_OUT,
        Easing::BACK_IN_OUT,
        Easing::ELASTIC_IN,
        Easing::ELASTIC_OUT,
        Easing::ELASTIC_IN_OUT,
        Easing::JUST_NONE,
        Easing::JUST_LINEAR,
        Easing::JUST_EASE_IN,
        Easing::JUST_EASE_OUT,
        Easing::JUST_EASE_INOUT,
        Easing::JUST_EASE_IN_BACK,
        Easing::JUST_EASE_OUT_BACK,
        Easing::JUST_BOUNCE_OUT,
        Easing::JUST_EASE_OUT_ELASTIC,
    ];

    /// Looks a preset up by its exact name, such as `"JUST_BOUNCE_OUT"`.
    pub fn preset(name: &str) -> Option<Easing> {
        LOOKUP.get(name).copied()
    }
}

fn create_lookup() -> AHashMap<&'static str, Easing> {
    let mut lookup = AHashMap::with_capacity(Easing::PRESETS.len());
    for easing in Easing::PRESETS {
        lookup.insert(easing.name(), *easing);
    }
    lookup
}
