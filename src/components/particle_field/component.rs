//! Leptos component wrapping the particle backdrop canvas.
//!
//! The component creates a canvas element and, once it is in the DOM, sizes it
//! to the viewport, scatters the particles and starts a `requestAnimationFrame`
//! loop. A window `resize` listener keeps the canvas matched to the viewport.
//! Both are released when the component is unmounted.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, trace, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::animator::ParticleAnimator;
use super::render::{CanvasSurface, Surface};
use super::scheduler::{AnimationFrameScheduler, FrameLoop, FrameScheduler};
use super::theme::ParticleStyle;

/// An event listener on `window`, removed again on drop.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	pub fn attach(
		window: &Window,
		event: &'static str,
		f: impl FnMut() + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut()>::new(f);
		window
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self {
			window: window.clone(),
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self.window.remove_event_listener_with_callback(
			self.event,
			self.callback.as_ref().unchecked_ref(),
		);
	}
}

/// A mounted, animating particle backdrop.
pub struct ParticleBackground<F: FrameScheduler> {
	frames: FrameLoop<F>,
	resize: Option<WindowListener>,
}

impl ParticleBackground<AnimationFrameScheduler> {
	/// Size `canvas` to the viewport and start animating it.
	///
	/// Returns `None` if there is no window or the canvas has no 2d context;
	/// the page simply goes without a backdrop.
	pub fn mount(canvas: HtmlCanvasElement, style: &ParticleStyle) -> Option<Self> {
		let window = web_sys::window()?;
		let (w, h) = viewport_size(&window)?;
		let surface = CanvasSurface::new(canvas)?;
		let animator = Rc::new(RefCell::new(ParticleAnimator::initialize(
			w,
			h,
			style,
			surface,
			&mut rand::thread_rng(),
		)));

		let animator_resize = animator.clone();
		let resize = WindowListener::attach(&window, "resize", move || {
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			trace!("particle field: resized to {}x{}", nw, nh);
			animator_resize.borrow_mut().resize(nw, nh);
		});
		if resize.is_none() {
			warn!("particle field: could not listen for window resize");
		}

		info!(
			"particle field: {} particles on {}x{}",
			style.particle_count(),
			w,
			h
		);
		let scheduler = Rc::new(AnimationFrameScheduler::new(window));
		Some(Self::run(animator, scheduler, resize))
	}
}

impl<F: FrameScheduler + 'static> ParticleBackground<F> {
	fn run<S: Surface + 'static>(
		animator: Rc<RefCell<ParticleAnimator<S>>>,
		scheduler: Rc<F>,
		resize: Option<WindowListener>,
	) -> Self {
		animator.borrow_mut().tick();
		let frames = FrameLoop::start(scheduler, move || animator.borrow_mut().tick());
		Self { frames, resize }
	}

	/// Stop the frame loop and drop the resize listener.
	pub fn teardown(self) {
		let Self { frames, resize } = self;
		frames.cancel();
		drop(resize);
		debug!("particle field: torn down");
	}
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Fullscreen, click-through canvas with drifting particles.
///
/// The canvas is absolutely positioned over its nearest positioned ancestor
/// and ignores pointer events. Pass `particles` to override the default
/// turquoise particles.
#[component]
pub fn ParticleFieldCanvas(#[prop(optional)] particles: Option<ParticleStyle>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let background: Rc<RefCell<Option<ParticleBackground<AnimationFrameScheduler>>>> =
		Rc::new(RefCell::new(None));
	let style = particles.unwrap_or_default();

	let background_init = background.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if background_init.borrow().is_some() {
			return;
		}
		match ParticleBackground::mount(canvas.into(), &style) {
			Some(bg) => *background_init.borrow_mut() = Some(bg),
			None => warn!("particle field: canvas unavailable, backdrop disabled"),
		}
	});

	let background_cleanup = SendWrapper::new(background);
	on_cleanup(move || {
		if let Some(bg) = background_cleanup.borrow_mut().take() {
			bg.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: absolute; inset: 0; pointer-events: none; opacity: 0.4;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::super::testing::{Call, ManualScheduler, RecordingSurface};
	use super::*;

	fn background(
		surface: RecordingSurface,
	) -> (
		ParticleBackground<ManualScheduler>,
		Rc<ManualScheduler>,
		Rc<RefCell<ParticleAnimator<RecordingSurface>>>,
	) {
		let animator = Rc::new(RefCell::new(ParticleAnimator::initialize(
			800.0,
			600.0,
			&ParticleStyle::default(),
			surface,
			&mut StdRng::seed_from_u64(3),
		)));
		let scheduler = Rc::new(ManualScheduler::default());
		let bg = ParticleBackground::run(animator.clone(), scheduler.clone(), None);
		(bg, scheduler, animator)
	}

	#[test]
	fn first_frame_is_painted_on_mount() {
		let surface = RecordingSurface::default();
		let log = surface.clone();
		let (_bg, scheduler, _animator) = background(surface);

		let calls = log.calls();
		assert_eq!(calls.len(), 1 + 101);
		assert_eq!(calls[1], Call::Clear(800.0, 600.0));
		assert_eq!(scheduler.queued(), 1);
	}

	#[test]
	fn every_pumped_frame_repaints() {
		let surface = RecordingSurface::default();
		let (_bg, scheduler, _animator) = background(surface.clone());
		surface.reset();

		scheduler.pump();
		scheduler.pump();
		assert_eq!(surface.calls().len(), 2 * 101);
	}

	#[test]
	fn teardown_stops_all_drawing() {
		let surface = RecordingSurface::default();
		let (bg, scheduler, animator) = background(surface.clone());
		scheduler.pump();

		bg.teardown();
		surface.reset();
		let before = animator.borrow().field().particles.clone();

		for _ in 0..10 {
			assert_eq!(scheduler.pump(), 0);
		}
		assert!(surface.calls().is_empty());
		assert_eq!(animator.borrow().field().particles, before);
		assert_eq!(Rc::strong_count(&animator), 1);
	}
}
