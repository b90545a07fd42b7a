//! In-memory stand-ins for the canvas and `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::render::Surface;
use super::scheduler::{FrameCallback, FrameHandle, FrameScheduler};

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Call {
	SetSize(f64, f64),
	Clear(f64, f64),
	FillCircle(f64, f64, f64, String),
}

/// Records every drawing call. Clones share the same log.
#[derive(Clone, Default)]
pub(crate) struct RecordingSurface {
	calls: Rc<RefCell<Vec<Call>>>,
}

impl RecordingSurface {
	pub(crate) fn calls(&self) -> Vec<Call> {
		self.calls.borrow().clone()
	}

	pub(crate) fn reset(&self) {
		self.calls.borrow_mut().clear();
	}
}

impl Surface for RecordingSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.calls.borrow_mut().push(Call::SetSize(width, height));
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.calls.borrow_mut().push(Call::Clear(width, height));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.calls
			.borrow_mut()
			.push(Call::FillCircle(x, y, radius, color.to_string()));
	}
}

/// Frames run only when the test calls [`ManualScheduler::pump`].
#[derive(Default)]
pub(crate) struct ManualScheduler {
	queue: RefCell<Vec<(FrameHandle, FrameCallback)>>,
	next_handle: Cell<FrameHandle>,
	released: Cell<u32>,
}

impl ManualScheduler {
	/// Run every frame queued so far. Frames they request wait for the next pump.
	pub(crate) fn pump(&self) -> usize {
		let due = self.take_queue();
		for (_, frame) in &due {
			frame();
		}
		due.len()
	}

	pub(crate) fn take_queue(&self) -> Vec<(FrameHandle, FrameCallback)> {
		self.queue.take()
	}

	pub(crate) fn queued(&self) -> usize {
		self.queue.borrow().len()
	}

	pub(crate) fn released(&self) -> u32 {
		self.released.get()
	}
}

impl FrameScheduler for ManualScheduler {
	fn request_frame(&self, frame: &FrameCallback) -> Option<FrameHandle> {
		let handle = self.next_handle.get() + 1;
		self.next_handle.set(handle);
		self.queue.borrow_mut().push((handle, frame.clone()));
		Some(handle)
	}

	fn cancel_frame(&self, handle: FrameHandle) {
		self.queue.borrow_mut().retain(|(h, _)| *h != handle);
	}

	fn release(&self) {
		self.released.set(self.released.get() + 1);
	}
}
