//! Ambient particle backdrop.
//!
//! Draws a slowly drifting field of translucent discs on a fullscreen canvas:
//! - Particles bounce off the viewport edges with no damping
//! - One simulation step and repaint per display refresh
//! - Canvas follows window resizes; particles keep their positions
//! - Frame loop and resize listener are released on unmount
//!
//! # Example
//!
//! ```ignore
//! use digital_asset_landing::components::particle_field::{ParticleFieldCanvas, ParticleStyle};
//!
//! let style = ParticleStyle { count: 60, ..ParticleStyle::default() };
//!
//! view! { <ParticleFieldCanvas particles=style /> }
//! ```

mod animator;
mod component;
mod particles;
mod render;
pub mod scheduler;
#[cfg(test)]
mod testing;
pub mod theme;

pub use animator::ParticleAnimator;
pub use component::{ParticleBackground, ParticleFieldCanvas, WindowListener};
pub use particles::{Particle, ParticleField};
pub use render::{CanvasSurface, Surface};
pub use theme::{Color, ParticleStyle};
