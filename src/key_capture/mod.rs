//! Key capture
//!
//! Records which keys the user presses until Escape is seen. Instead of a
//! blocking loop, [`KeyCapture`] is a small state machine that the editor
//! ticks from a timer:
//!
//! ```text
//! Idle --start--> Capturing --tick (Escape after >=1 key)--> Done(Captured)
//!                     |------tick (deadline passed)--------> Done(TimedOut)
//!                     '------cancel------------------------> Done(Cancelled)
//! ```
//!
//! Each tick performs one pass over the key-code range and appends the first
//! pressed code. A key held across passes is appended once per pass.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Result, ResultExt};

mod vk;
#[cfg(windows)]
mod win32;
#[cfg(not(windows))]
mod device;

#[cfg(not(windows))]
pub use device::DeviceKeyState;
pub use vk::vk_from_key_name;
#[cfg(windows)]
pub use win32::Win32KeyState;

/// Every code a pass looks at
pub const KEY_CODE_RANGE: RangeInclusive<u8> = 0..=u8::MAX;

/// Virtual-key code of Escape, which ends a capture
pub const CANCEL_KEY: u8 = 0x1B;

/// Joins captured codes in the stored `keys` string
pub const KEY_SEPARATOR: &str = "+";

/// Point-in-time keyboard state.
pub trait KeyStateSource {
    /// Whether `code` is down (or was pressed since the last query).
    fn is_pressed(&self, code: u8) -> bool;

    /// Whether the cancel key is pressed or toggled.
    fn is_cancel_active(&self) -> bool;

    /// Lowest code in [`KEY_CODE_RANGE`] reported pressed. Stops querying at the
    /// first hit.
    fn first_pressed(&self) -> Option<u8> {
        KEY_CODE_RANGE.into_iter().find(|code| self.is_pressed(*code))
    }
}

/// Keyboard state of the platform this binary runs on
pub fn system_key_state() -> Result<Box<dyn KeyStateSource>> {
    #[cfg(windows)]
    {
        Ok(Box::new(Win32KeyState))
    }
    #[cfg(not(windows))]
    {
        Ok(Box::new(DeviceKeyState::new()?))
    }
}

/// How a finished capture ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// Joined key codes, e.g. `"1+65+27"`
    Captured(String),
    TimedOut,
    Cancelled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CapturePhase {
    #[default]
    Idle,
    Capturing,
    Done(CaptureResult),
}

#[derive(Debug, Default)]
pub struct KeyCapture {
    phase: CapturePhase,
    codes: Vec<u8>,
    timeout: Option<Duration>,
    deadline: Option<Instant>,
}

impl KeyCapture {
    /// A capture that, once started, gives up after `timeout` (if any).
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> &CapturePhase {
        &self.phase
    }

    pub fn is_capturing(&self) -> bool {
        self.phase == CapturePhase::Capturing
    }

    /// Codes appended so far in the current or last capture
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Begin (or restart) capturing. Previously captured codes are dropped.
    pub fn start(&mut self, now: Instant) {
        self.codes.clear();
        self.deadline = self.timeout.map(|t| now + t);
        self.phase = CapturePhase::Capturing;
        info!(event_type = "capture", action = "started", timeout = ?self.timeout, "Key capture started");
    }

    /// Open a keyboard source with `open_source` and start capturing from it.
    ///
    /// If the source cannot be opened the failure is logged, the phase is left
    /// as it was and `None` is returned.
    pub fn start_with<F>(&mut self, open_source: F, now: Instant) -> Option<Box<dyn KeyStateSource>>
    where
        F: FnOnce() -> Result<Box<dyn KeyStateSource>>,
    {
        let source = open_source().warn_on_err()?;
        self.start(now);
        Some(source)
    }

    /// One sampling pass. No-op unless capturing.
    pub fn tick(&mut self, source: &dyn KeyStateSource, now: Instant) -> &CapturePhase {
        if !self.is_capturing() {
            return &self.phase;
        }

        if let Some(code) = source.first_pressed() {
            self.codes.push(code);
            debug!(code = code, total = self.codes.len(), "Captured key code");
        }

        if !self.codes.is_empty() && source.is_cancel_active() {
            let joined = join_codes(&self.codes);
            info!(event_type = "capture", action = "finished", keys = %joined, "Key capture finished");
            self.finish(CaptureResult::Captured(joined));
        } else if self.deadline.is_some_and(|deadline| now >= deadline) {
            info!(event_type = "capture", action = "timed_out", captured = self.codes.len(), "Key capture timed out");
            self.finish(CaptureResult::TimedOut);
        }

        &self.phase
    }

    /// Abandon a running capture.
    pub fn cancel(&mut self) {
        if self.is_capturing() {
            info!(event_type = "capture", action = "cancelled", "Key capture cancelled");
            self.finish(CaptureResult::Cancelled);
        }
    }

    /// Hand out the result of a finished capture and return to Idle.
    pub fn take_result(&mut self) -> Option<CaptureResult> {
        match std::mem::take(&mut self.phase) {
            CapturePhase::Done(result) => Some(result),
            other => {
                self.phase = other;
                None
            }
        }
    }

    fn finish(&mut self, result: CaptureResult) {
        self.deadline = None;
        self.phase = CapturePhase::Done(result);
    }
}

/// `[1, 65, 27]` -> `"1+65+27"`
pub fn join_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

#[cfg(test)]
#[path = "key_capture_tests.rs"]
mod tests;
