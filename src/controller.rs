//! Recorder controller contract
//!
//! The control server drives the host application's recorder through this
//! trait. The host owns the recorder; the server only holds a weak handle
//! and must keep working (degraded) if the recorder goes away first.

use std::rc::{Rc, Weak};

/// State queries and commands the host recorder must provide.
///
/// Everything runs on the single event-loop thread, so methods take `&self`
/// and implementations are free to use `Cell`/`RefCell` for their state.
/// Commands are fire-and-forget: they must accept the request and return
/// immediately, not wait for the recording pipeline.
pub trait RecorderController {
    /// True while a recording session is active (paused counts as active).
    fn is_recording(&self) -> bool;

    /// True while an active session is paused.
    fn is_paused(&self) -> bool;

    /// Name of the file currently being written, empty if none.
    fn current_file_name(&self) -> String;

    /// Size of the output file in bytes.
    fn current_file_size(&self) -> u64;

    /// Elapsed recording time in milliseconds.
    fn total_time(&self) -> u64;

    /// Begin a new recording session.
    fn start(&self);

    /// Resume if paused, pause otherwise.
    fn toggle_pause(&self);

    /// Transition recording -> paused.
    fn pause(&self);

    /// Finalize the output. `confirm = false` skips any interactive prompt.
    fn save(&self, confirm: bool);

    /// Discard the output. `confirm = false` skips any interactive prompt.
    fn cancel(&self, confirm: bool);
}

/// Non-owning handle to the host recorder.
///
/// Cloned into every connection task. Upgrading can fail once the host has
/// dropped the recorder; callers handle that per endpoint instead of
/// assuming liveness.
#[derive(Clone)]
pub struct ControllerHandle {
    inner: Weak<dyn RecorderController>,
}

impl ControllerHandle {
    pub fn new(inner: Weak<dyn RecorderController>) -> Self {
        Self { inner }
    }

    /// Borrow the recorder for the duration of one dispatch.
    pub fn upgrade(&self) -> Option<Rc<dyn RecorderController>> {
        self.inner.upgrade()
    }

    /// Whether the recorder still exists.
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
