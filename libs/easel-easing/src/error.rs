use thiserror::Error;

/// Failure to resolve an easing by name.
///
/// Evaluation itself never fails, only lookups do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EasingError {
    #[error("unknown easing preset \"{0}\"")]
    UnknownPreset(String),
    #[error("unknown curve shape \"{0}\"")]
    UnknownCurve(String),
    #[error("unknown taper mode \"{0}\"")]
    UnknownTaper(String),
}
