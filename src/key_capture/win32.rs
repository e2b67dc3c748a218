use windows::Win32::UI::Input::KeyboardAndMouse::{GetAsyncKeyState, GetKeyState, VK_ESCAPE};

use super::KeyStateSource;

/// Keyboard state straight from Win32.
///
/// `GetAsyncKeyState` is non-zero while a key is down and once after it was
/// pressed; `GetKeyState` on Escape is non-zero while it is down or toggled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32KeyState;

impl KeyStateSource for Win32KeyState {
    fn is_pressed(&self, code: u8) -> bool {
        unsafe { GetAsyncKeyState(code as i32) != 0 }
    }

    fn is_cancel_active(&self) -> bool {
        unsafe { GetKeyState(VK_ESCAPE.0 as i32) != 0 }
    }
}
