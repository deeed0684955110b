//! Non-blocking keyboard source for the ship.
//!
//! Every poll drains whatever key events are already queued and folds them
//! into one [`Controls`] value: the later key wins on each axis, fire latches
//! if pressed at least once. Terminals without key-release events work the
//! same way, since only presses and repeats are looked at.

use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::warn;

use space_garbage_engine::InputSource;
use space_garbage_types::{Controls, MAX_KEYS_PER_POLL};

use crate::map::{map_key, KeyIntent};

/// Folds decoded intents into controls. Independent of the terminal.
#[derive(Debug, Clone, Default)]
pub struct ControlLatch {
    controls: Controls,
    quit: bool,
}

impl ControlLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, intent: KeyIntent) {
        match intent {
            KeyIntent::Up => self.controls.y_direction = -1,
            KeyIntent::Down => self.controls.y_direction = 1,
            KeyIntent::Left => self.controls.x_direction = -1,
            KeyIntent::Right => self.controls.x_direction = 1,
            KeyIntent::Fire => self.controls.fire = true,
            KeyIntent::Quit => self.quit = true,
        }
    }

    pub fn apply_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(intent) = map_key(key) {
            self.apply(intent);
        }
    }

    /// Hand out what accumulated and start over. Quit stays latched.
    pub fn take(&mut self) -> Controls {
        std::mem::take(&mut self.controls)
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

#[derive(Debug, Default)]
pub struct KeyboardInput {
    latch: ControlLatch,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn drain(&mut self) {
        let mut keys: ArrayVec<KeyEvent, MAX_KEYS_PER_POLL> = ArrayVec::new();
        while !keys.is_full() {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    warn!(error = %err, "input poll failed");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => keys.push(key),
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "input read failed");
                    break;
                }
            }
        }
        for key in keys {
            self.latch.apply_key(key);
        }
    }
}

impl InputSource for KeyboardInput {
    fn read_controls(&mut self) -> Controls {
        self.drain();
        self.latch.take()
    }

    fn quit_requested(&mut self) -> bool {
        self.drain();
        self.latch.quit_requested()
    }
}
