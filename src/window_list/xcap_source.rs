use tracing::trace;

use super::WindowSource;
use crate::error::{KeytimeError, Result};

/// Top-level windows via `xcap`. Minimized windows count as not visible.
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapWindows;

impl WindowSource for XcapWindows {
    fn visible_titles(&self) -> Result<Vec<String>> {
        let windows =
            xcap::Window::all().map_err(|e| KeytimeError::WindowEnumeration(e.to_string()))?;

        let mut titles = Vec::with_capacity(windows.len());
        for window in windows {
            if window.is_minimized().unwrap_or(true) {
                continue;
            }
            match window.title() {
                Ok(title) => titles.push(title),
                Err(e) => trace!(error = %e, "Skipping window without readable title"),
            }
        }
        Ok(titles)
    }
}
