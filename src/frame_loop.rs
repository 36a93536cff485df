// Book-keeping for a cancellable repeating frame task. The host (requestAnimationFrame
// in the browser) owns the actual scheduling; this tracks whether the loop may still
// run and which request is outstanding so teardown can cancel it exactly once.

#[derive(Debug)]
pub struct FrameLoop<H: Copy = i32> {
    active: bool,
    pending: Option<H>,
    frames: u64,
}

impl<H: Copy> FrameLoop<H> {
    pub fn new() -> Self {
        FrameLoop {
            active: true,
            pending: None,
            frames: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // Called at the top of every frame callback. Returns false once the loop
    // has been cancelled, in which case the callback must not touch any state.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.active {
            self.frames += 1;
        }
        self.active
    }

    // Ignored after cancel so a late request can't resurrect the loop
    pub fn scheduled(&mut self, handle: H) -> bool {
        if self.active {
            self.pending = Some(handle);
        }
        self.active
    }

    // Stops the loop. Hands back the outstanding request the first time so the
    // caller can cancel it with the host; later calls return `None`.
    pub fn cancel(&mut self) -> Option<H> {
        self.active = false;
        self.pending.take()
    }
}

impl<H: Copy> Default for FrameLoop<H> {
    fn default() -> Self {
        FrameLoop::new()
    }
}
