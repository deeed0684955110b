//! Input seam: a non-blocking source of [`Controls`].

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use space_garbage_types::Controls;

pub trait InputSource {
    /// Everything pressed since the previous call. Must not block; returns
    /// idle controls when nothing was pressed.
    fn read_controls(&mut self) -> Controls;

    /// Whether the player asked to leave. Checked once per pass.
    fn quit_requested(&mut self) -> bool {
        false
    }
}

impl<I: InputSource + ?Sized> InputSource for Rc<RefCell<I>> {
    fn read_controls(&mut self) -> Controls {
        self.borrow_mut().read_controls()
    }

    fn quit_requested(&mut self) -> bool {
        self.borrow_mut().quit_requested()
    }
}

/// Replays queued controls, then reports idle forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Controls>,
    quit: bool,
    reads: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_controls(controls: impl IntoIterator<Item = Controls>) -> Self {
        Self {
            queue: controls.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, controls: Controls) {
        self.queue.push_back(controls);
    }

    /// Ask the loop to stop after the current pass.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Number of polls so far.
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl InputSource for ScriptedInput {
    fn read_controls(&mut self) -> Controls {
        self.reads += 1;
        self.queue.pop_front().unwrap_or_default()
    }

    fn quit_requested(&mut self) -> bool {
        self.quit
    }
}
