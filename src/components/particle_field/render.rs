//! Drawing the particle field.
//!
//! Drawing goes through the [`Surface`] trait so the animator can be driven
//! against a canvas in the browser and against a recorder in tests.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::particles::ParticleField;

/// Something the particle field can be painted onto.
pub trait Surface {
	/// Resize the backing pixel buffer.
	fn set_size(&mut self, width: f64, height: f64);
	/// Erase the `width` x `height` area anchored at the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a disc centred on `(x, y)` with a CSS color.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

/// A `<canvas>` element together with its 2d context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Returns `None` when the browser cannot hand out a 2d context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()??
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.ctx.set_fill_style_str(color);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}
}

/// Clears the surface and paints every particle as a filled disc.
pub fn render<S: Surface>(field: &ParticleField, surface: &mut S, color: &str) {
	surface.clear(field.width(), field.height());

	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.size, color);
	}
}
