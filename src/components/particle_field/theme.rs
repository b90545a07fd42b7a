//! Visual style for the particle backdrop.
//!
//! Everything here is plain data with serde support so the page can override
//! the defaults from a JSON block in the DOM.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle population and appearance.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleStyle {
	/// Number of particles created at mount.
	pub count: usize,
	/// Largest absolute velocity per axis, in pixels per frame.
	pub speed: f64,
	/// Exclusive upper bound on particle radius.
	pub size_max: f64,
	/// Fill color for every particle.
	pub color: Color,
}

impl ParticleStyle {
	/// Upper bound on `count`; larger populations are cut down to this.
	pub const MAX_COUNT: usize = 5_000;

	/// Turquoise dust, 100 particles drifting at most a quarter pixel per frame.
	pub fn turquoise() -> Self {
		Self {
			count: 100,
			speed: 0.25,
			size_max: 2.0,
			color: Color::rgb(64, 224, 208).with_alpha(0.5),
		}
	}

	/// Particle count actually allocated, never more than [`Self::MAX_COUNT`].
	pub fn particle_count(&self) -> usize {
		self.count.min(Self::MAX_COUNT)
	}
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self::turquoise()
	}
}
