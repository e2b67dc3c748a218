use windows::Win32::Foundation::{BOOL, HWND, LPARAM, TRUE};
use windows::Win32::UI::WindowsAndMessaging::{EnumWindows, GetWindowTextW, IsWindowVisible};

use super::WindowSource;
use crate::error::{KeytimeError, Result};

/// Longest title read from a window, in UTF-16 units
const TITLE_BUFFER_LEN: usize = 512;

/// Top-level windows via `EnumWindows`
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Windows;

unsafe extern "system" fn collect_visible_title(hwnd: HWND, lparam: LPARAM) -> BOOL {
    let titles = &mut *(lparam.0 as *mut Vec<String>);
    if IsWindowVisible(hwnd).as_bool() {
        let mut buf = [0u16; TITLE_BUFFER_LEN];
        let len = GetWindowTextW(hwnd, &mut buf);
        titles.push(String::from_utf16_lossy(&buf[..len.max(0) as usize]));
    }
    TRUE
}

impl WindowSource for Win32Windows {
    fn visible_titles(&self) -> Result<Vec<String>> {
        let mut titles: Vec<String> = Vec::new();
        unsafe {
            EnumWindows(
                Some(collect_visible_title),
                LPARAM(&mut titles as *mut Vec<String> as isize),
            )
        }
        .map_err(|e| KeytimeError::WindowEnumeration(e.to_string()))?;
        Ok(titles)
    }
}
