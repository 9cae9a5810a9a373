//! Per-frame callback scheduling.

/// Opaque id for a scheduled frame, as returned by the host
/// (`requestAnimationFrame` returns an `i32` in browsers).
pub type FrameHandle = i32;

/// Request-next-frame / cancel-scheduled-frame pair supplied by the host.
pub trait FrameScheduler {
    /// Ask the host to call back once on the next frame. `None` means the
    /// request was refused and nothing is scheduled.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// At most one outstanding frame request on top of a [`FrameScheduler`].
#[derive(Debug, Default)]
pub struct FrameSlot<F: FrameScheduler> {
    scheduler: F,
    pending: Option<FrameHandle>,
}

impl<F: FrameScheduler> FrameSlot<F> {
    pub fn new(scheduler: F) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Request a frame unless one is already pending.
    pub fn schedule(&mut self) {
        if self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    /// Cancel the pending frame, if any. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
    }

    /// Mark the pending frame as delivered by the host.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }
}

/// Headless scheduler: frames are fired explicitly by the driver.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_handle: FrameHandle,
    pending: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested and not yet fired or cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }

    /// Remove the oldest pending frame, as if the host just invoked it.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_handle = self.next_handle.wrapping_add(1);
        self.requested += 1;
        self.pending.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}
