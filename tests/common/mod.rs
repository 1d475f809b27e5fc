#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use ssr_control::controller::{ControllerHandle, RecorderController};

/// Scriptable recorder honouring the controller contract.
///
/// Tests preset the state flags, run requests, then assert on the call
/// counters. Commands also update the flags the way a real recorder would,
/// so multi-request tests see state advance.
#[derive(Default)]
pub struct FakeRecorder {
    pub recording: Cell<bool>,
    pub paused: Cell<bool>,
    pub file_name: RefCell<String>,
    pub file_size: Cell<u64>,
    pub total_time: Cell<u64>,

    pub start_calls: Cell<u32>,
    pub toggle_pause_calls: Cell<u32>,
    pub pause_calls: Cell<u32>,
    pub save_calls: Cell<u32>,
    pub cancel_calls: Cell<u32>,
    pub last_confirm: Cell<Option<bool>>,
}

impl FakeRecorder {
    pub fn idle() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn recording() -> Rc<Self> {
        let rec = Self::default();
        rec.recording.set(true);
        Rc::new(rec)
    }

    pub fn paused() -> Rc<Self> {
        let rec = Self::default();
        rec.recording.set(true);
        rec.paused.set(true);
        Rc::new(rec)
    }

    pub fn handle(rec: &Rc<Self>) -> ControllerHandle {
        let rec: Rc<dyn RecorderController> = rec.clone();
        let weak: Weak<dyn RecorderController> = Rc::downgrade(&rec);
        ControllerHandle::new(weak)
    }
}

impl RecorderController for FakeRecorder {
    fn is_recording(&self) -> bool {
        self.recording.get()
    }

    fn is_paused(&self) -> bool {
        self.paused.get()
    }

    fn current_file_name(&self) -> String {
        self.file_name.borrow().clone()
    }

    fn current_file_size(&self) -> u64 {
        self.file_size.get()
    }

    fn total_time(&self) -> u64 {
        self.total_time.get()
    }

    fn start(&self) {
        self.start_calls.set(self.start_calls.get() + 1);
        self.recording.set(true);
        self.paused.set(false);
    }

    fn toggle_pause(&self) {
        self.toggle_pause_calls.set(self.toggle_pause_calls.get() + 1);
        self.paused.set(!self.paused.get());
    }

    fn pause(&self) {
        self.pause_calls.set(self.pause_calls.get() + 1);
        self.paused.set(true);
    }

    fn save(&self, confirm: bool) {
        self.save_calls.set(self.save_calls.get() + 1);
        self.last_confirm.set(Some(confirm));
        self.recording.set(false);
        self.paused.set(false);
    }

    fn cancel(&self, confirm: bool) {
        self.cancel_calls.set(self.cancel_calls.get() + 1);
        self.last_confirm.set(Some(confirm));
        self.recording.set(false);
        self.paused.set(false);
    }
}
