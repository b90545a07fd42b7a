//! Per-frame scheduling.
//!
//! [`FrameLoop`] re-requests itself after every frame rather than running on a
//! fixed timer, so the browser can align frames with display refresh. The
//! actual "call me next frame" primitive sits behind [`FrameScheduler`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Callback handed to a scheduler for the next frame.
pub type FrameCallback = Rc<dyn Fn()>;

/// Identifies a pending frame request so it can be cancelled.
pub type FrameHandle = i32;

/// Capability to run a callback once on the next display refresh.
pub trait FrameScheduler {
	/// Queue `frame` for the next refresh. `None` if the request was refused.
	fn request_frame(&self, frame: &FrameCallback) -> Option<FrameHandle>;

	/// Drop a pending request so its callback never runs.
	fn cancel_frame(&self, handle: FrameHandle);

	/// Free anything held on behalf of the loop. Called once, after the final cancel.
	fn release(&self) {}
}

/// `requestAnimationFrame` on a browser window.
pub struct AnimationFrameScheduler {
	window: Window,
	closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AnimationFrameScheduler {
	pub fn new(window: Window) -> Self {
		Self {
			window,
			closure: RefCell::new(None),
		}
	}
}

impl FrameScheduler for AnimationFrameScheduler {
	fn request_frame(&self, frame: &FrameCallback) -> Option<FrameHandle> {
		// A loop only ever schedules the same callback, so one JS closure serves every frame.
		let mut closure = self.closure.borrow_mut();
		let closure = closure.get_or_insert_with(|| {
			let frame = frame.clone();
			Closure::new(move || frame())
		});
		let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
		self.window.request_animation_frame(callback).ok()
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		let _ = self.window.cancel_animation_frame(handle);
	}

	fn release(&self) {
		self.closure.borrow_mut().take();
	}
}

/// A running per-frame loop. Cancelled on [`FrameLoop::cancel`] or drop.
pub struct FrameLoop<S: FrameScheduler> {
	scheduler: Rc<S>,
	running: Rc<Cell<bool>>,
	pending: Rc<Cell<Option<FrameHandle>>>,
	frame: Rc<RefCell<Option<FrameCallback>>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
	/// Schedule `on_frame` for the next refresh and every refresh after it.
	pub fn start(scheduler: Rc<S>, on_frame: impl FnMut() + 'static) -> Self {
		let running = Rc::new(Cell::new(true));
		let pending: Rc<Cell<Option<FrameHandle>>> = Rc::new(Cell::new(None));
		let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

		// The callback only holds weak references back to the scheduler and to
		// itself; the loop handle keeps them alive.
		let callback: FrameCallback = {
			let (scheduler, frame) = (Rc::downgrade(&scheduler), Rc::downgrade(&frame));
			let (running, pending) = (running.clone(), pending.clone());
			let on_frame = RefCell::new(on_frame);
			Rc::new(move || {
				pending.set(None);
				if !running.get() {
					return;
				}
				(*on_frame.borrow_mut())();
				if running.get() {
					reschedule(&scheduler, &frame, &pending);
				}
			})
		};

		*frame.borrow_mut() = Some(callback.clone());
		pending.set(scheduler.request_frame(&callback));

		Self {
			scheduler,
			running,
			pending,
			frame,
		}
	}
}

impl<S: FrameScheduler> FrameLoop<S> {
	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Stop the loop. No frame callback runs after this returns.
	pub fn cancel(&self) {
		if !self.running.replace(false) {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.frame.borrow_mut().take();
		self.scheduler.release();
	}
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
	fn drop(&mut self) {
		self.cancel();
	}
}

fn reschedule<S: FrameScheduler>(
	scheduler: &Weak<S>,
	frame: &Weak<RefCell<Option<FrameCallback>>>,
	pending: &Cell<Option<FrameHandle>>,
) {
	let (Some(scheduler), Some(frame)) = (scheduler.upgrade(), frame.upgrade()) else {
		return;
	};
	let next = frame.borrow().clone();
	if let Some(next) = next {
		pending.set(scheduler.request_frame(&next));
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::rc::Rc;

	use super::super::testing::ManualScheduler;
	use super::*;

	fn counting_loop(
		scheduler: &Rc<ManualScheduler>,
	) -> (FrameLoop<ManualScheduler>, Rc<Cell<u32>>) {
		let count = Rc::new(Cell::new(0));
		let counter = count.clone();
		let frames = FrameLoop::start(scheduler.clone(), move || counter.set(counter.get() + 1));
		(frames, count)
	}

	#[test]
	fn start_requests_exactly_one_frame() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (_frames, count) = counting_loop(&scheduler);
		assert_eq!(scheduler.queued(), 1);
		assert_eq!(count.get(), 0);
	}

	#[test]
	fn each_frame_schedules_the_next() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, count) = counting_loop(&scheduler);
		for expected in 1..=5 {
			assert_eq!(scheduler.pump(), 1);
			assert_eq!(count.get(), expected);
			assert_eq!(scheduler.queued(), 1);
		}
		assert!(frames.is_running());
	}

	#[test]
	fn cancel_stops_further_frames() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, count) = counting_loop(&scheduler);
		scheduler.pump();
		frames.cancel();

		assert!(!frames.is_running());
		assert_eq!(scheduler.queued(), 0);
		assert_eq!(scheduler.pump(), 0);
		assert_eq!(count.get(), 1);
		assert_eq!(scheduler.released(), 1);
	}

	#[test]
	fn cancel_twice_releases_once() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, _count) = counting_loop(&scheduler);
		frames.cancel();
		frames.cancel();
		drop(frames);
		assert_eq!(scheduler.released(), 1);
	}

	#[test]
	fn dropping_the_loop_cancels_it() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, count) = counting_loop(&scheduler);
		drop(frames);
		assert_eq!(scheduler.pump(), 0);
		assert_eq!(count.get(), 0);
	}

	#[test]
	fn frame_already_dispatched_after_cancel_is_a_no_op() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, count) = counting_loop(&scheduler);
		let stale = scheduler.take_queue();
		frames.cancel();
		for (_, frame) in stale {
			frame();
		}
		assert_eq!(count.get(), 0);
		assert_eq!(scheduler.queued(), 0);
	}

	#[test]
	fn loop_does_not_leak_itself() {
		let scheduler = Rc::new(ManualScheduler::default());
		let (frames, _count) = counting_loop(&scheduler);
		let weak = Rc::downgrade(&frames.frame);
		drop(frames);
		assert!(weak.upgrade().is_none());
		assert_eq!(Rc::strong_count(&scheduler), 1);
	}
}
