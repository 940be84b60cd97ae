//! # Easel Easing
//! Normalized progress for time based animation.
//! Given an elapsed time and a total duration, an [`Easing`] tells how far along a motion should be,
//! shaped by a [`CurveShape`] and mirrored over time by a [`TaperMode`].
//!
//! Everything here is immutable and stateless; presets are plain constants and can be shared freely.

pub mod config;
mod curve;
mod easing;
mod error;
mod preset;
mod taper;

pub use crate::curve::CurveShape;
pub use crate::easing::Easing;
pub use crate::error::EasingError;
pub use crate::taper::TaperMode;
