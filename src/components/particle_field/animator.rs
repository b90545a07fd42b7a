//! The particle animator: a particle field bound to a drawing surface.

use rand::Rng;

use super::particles::ParticleField;
use super::render::{self, Surface};
use super::theme::ParticleStyle;

/// Drives one particle field on one surface, a frame at a time.
pub struct ParticleAnimator<S> {
	field: ParticleField,
	surface: S,
	fill: String,
}

impl<S: Surface> ParticleAnimator<S> {
	/// Sizes the surface and scatters a fresh particle population over it.
	pub fn initialize<R: Rng>(
		width: f64,
		height: f64,
		style: &ParticleStyle,
		mut surface: S,
		rng: &mut R,
	) -> Self {
		surface.set_size(width, height);
		Self {
			field: ParticleField::new(style, width, height, rng),
			surface,
			fill: style.color.to_css(),
		}
	}

	/// New bounds for both the surface and the bounce walls.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.surface.set_size(width, height);
		self.field.resize(width, height);
	}

	/// Step the simulation once and repaint.
	pub fn tick(&mut self) {
		self.field.update();
		render::render(&self.field, &mut self.surface, &self.fill);
	}

	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	#[cfg(test)]
	pub(crate) fn surface(&self) -> &S {
		&self.surface
	}
}
