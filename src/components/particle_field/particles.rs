//! Ambient particle population with reflective walls.

use rand::Rng;
use rand::distributions::Standard;

use super::theme::ParticleStyle;

/// A single drifting particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Disc radius in pixels.
	pub size: f64,
}

impl Particle {
	/// Advance one frame and bounce off any wall the new position lies beyond.
	///
	/// The position is not clamped, so a particle can sit up to one step past
	/// the edge before its reversed velocity carries it back.
	fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}
}

/// Owns the particle population and the bounds they bounce within.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Scatter `style.count` particles (capped at [`ParticleStyle::MAX_COUNT`])
	/// uniformly over a `width` x `height` surface.
	pub fn new<R: Rng>(style: &ParticleStyle, width: f64, height: f64, rng: &mut R) -> Self {
		let speed = style.speed.abs();
		let size_max = style.size_max.max(0.0);

		let particles = (0..style.particle_count())
			.map(|_| Particle {
				x: unit(rng) * width,
				y: unit(rng) * height,
				vx: (unit(rng) - 0.5) * 2.0 * speed,
				vy: (unit(rng) - 0.5) * 2.0 * speed,
				size: unit(rng) * size_max,
			})
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Move every particle one frame.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			p.step(self.width, self.height);
		}
	}

	/// Change the bounds. Particles keep their positions, even ones now outside.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

/// Uniform sample in `[0, 1)`.
fn unit<R: Rng>(rng: &mut R) -> f64 {
	rng.sample(Standard)
}
