use device_query::{DeviceQuery, DeviceState};
use tracing::trace;

use super::vk::vk_from_key_name;
use super::{KeyStateSource, CANCEL_KEY};
use crate::error::{KeytimeError, Result};

/// Held keys via `device_query`, reported as Windows virtual-key codes.
///
/// There is no toggle state here, so the cancel key only counts while held.
pub struct DeviceKeyState {
    device: DeviceState,
}

impl DeviceKeyState {
    /// Fails when there is no display server to query (headless or
    /// Wayland-only sessions).
    pub fn new() -> Result<Self> {
        DeviceState::checked_new()
            .map(|device| Self { device })
            .ok_or_else(|| KeytimeError::KeyState("no X display to query keys from".to_string()))
    }

    fn held_codes(&self) -> Vec<u8> {
        self.device
            .get_keys()
            .iter()
            .filter_map(|key| {
                let name = format!("{:?}", key);
                let code = vk_from_key_name(&name);
                if code.is_none() {
                    trace!(key = %name, "No virtual-key code for key");
                }
                code
            })
            .collect()
    }
}

impl KeyStateSource for DeviceKeyState {
    fn is_pressed(&self, code: u8) -> bool {
        self.held_codes().contains(&code)
    }

    fn is_cancel_active(&self) -> bool {
        self.is_pressed(CANCEL_KEY)
    }

    // One device query per pass instead of one per code
    fn first_pressed(&self) -> Option<u8> {
        self.held_codes().into_iter().min()
    }
}
