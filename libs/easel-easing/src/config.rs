use log::debug;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::error::EasingError;

/// A serializable reference to a preset, optionally with its own strength.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EasingConfig {
	#[serde(default = "EasingConfig::default_preset")]
	pub preset: String,
	#[serde(default = "EasingConfig::default_strength")]
	pub strength: f32,
}

impl EasingConfig {
	pub fn default_preset() -> String {
		Easing::NONE.name().to_string()
	}

	pub fn default_strength() -> f32 {
		1.0
	}

	pub fn resolve(&self) -> Result<Easing, EasingError> {
		let easing: Easing = self.preset.parse()?;
		debug!("Resolved easing {} with strength {}", easing, self.strength);
		if self.strength == easing.strength() {
			Ok(easing)
		} else {
			Ok(easing.with_strength(self.strength))
		}
	}
}

impl Default for EasingConfig {
	fn default() -> Self {
		EasingConfig {
			preset: Self::default_preset(),
			strength: Self::default_strength(),
		}
	}
}

impl From<Easing> for EasingConfig {
	fn from(easing: Easing) -> Self {
		EasingConfig {
			preset: easing.name().to_string(),
			strength: easing.strength(),
		}
	}
}
