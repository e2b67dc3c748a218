//! Window Enumerator
//!
//! Lists the titles of visible top-level windows for the editor's window
//! selector. Every call takes a fresh snapshot; titles keep the order the OS
//! enumerates them in.

use tracing::debug;

use crate::config::Config;
use crate::error::Result;

#[cfg(windows)]
mod win32;
#[cfg(not(windows))]
mod xcap_source;

#[cfg(windows)]
pub use win32::Win32Windows;
#[cfg(not(windows))]
pub use xcap_source::XcapWindows;

/// Something that can report visible top-level window titles, unfiltered.
pub trait WindowSource {
    fn visible_titles(&self) -> Result<Vec<String>>;
}

/// Window source of the platform this binary runs on
pub fn system_window_source() -> Box<dyn WindowSource> {
    #[cfg(windows)]
    {
        Box::new(Win32Windows)
    }
    #[cfg(not(windows))]
    {
        Box::new(XcapWindows)
    }
}

pub struct WindowEnumerator {
    source: Box<dyn WindowSource>,
    denylist: Vec<String>,
}

impl WindowEnumerator {
    pub fn new(source: Box<dyn WindowSource>, denylist: Vec<String>) -> Self {
        Self { source, denylist }
    }

    /// Platform source with the configured denylist
    pub fn from_config(config: &Config) -> Self {
        Self::new(system_window_source(), config.window_denylist())
    }

    pub fn denylist(&self) -> &[String] {
        &self.denylist
    }

    /// Visible window titles, minus empty and denylisted ones.
    pub fn list_windows(&self) -> Result<Vec<String>> {
        let titles = self.source.visible_titles()?;
        let total = titles.len();
        let kept = filter_titles(titles, &self.denylist);
        debug!(total = total, kept = kept.len(), "Enumerated windows");
        Ok(kept)
    }
}

/// Drop empty titles and exact denylist matches, keeping order.
pub fn filter_titles(titles: Vec<String>, denylist: &[String]) -> Vec<String> {
    titles
        .into_iter()
        .filter(|title| !title.is_empty() && !denylist.iter().any(|denied| denied == title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeytimeError;

    struct FixedWindows(Vec<&'static str>);

    impl WindowSource for FixedWindows {
        fn visible_titles(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|t| t.to_string()).collect())
        }
    }

    struct BrokenWindows;

    impl WindowSource for BrokenWindows {
        fn visible_titles(&self) -> Result<Vec<String>> {
            Err(KeytimeError::WindowEnumeration("access denied".to_string()))
        }
    }

    fn enumerator(titles: Vec<&'static str>) -> WindowEnumerator {
        WindowEnumerator::new(
            Box::new(FixedWindows(titles)),
            Config::default().window_denylist(),
        )
    }

    #[test]
    fn test_list_windows_removes_builtin_denylist_and_empty_titles() {
        let windows = enumerator(vec![
            "Notepad",
            "",
            "keytime64",
            "Program Manager",
            "Microsoft Text Input Application",
            "Settings",
            "Calculator",
        ])
        .list_windows()
        .unwrap();

        assert_eq!(windows, vec!["Notepad".to_string(), "Calculator".to_string()]);
    }

    #[test]
    fn test_list_windows_keeps_enumeration_order_and_duplicates() {
        let windows = enumerator(vec!["Zeta", "Alpha", "Zeta"]).list_windows().unwrap();
        assert_eq!(windows, vec!["Zeta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_denylist_matches_whole_titles_only() {
        let windows = enumerator(vec!["keytime64 - notes", "Settings ", "settings"])
            .list_windows()
            .unwrap();
        assert_eq!(windows, vec!["keytime64 - notes", "Settings ", "settings"]);
    }

    #[test]
    fn test_configured_titles_are_hidden_too() {
        let config = Config {
            window_denylist: vec!["Task Switching".to_string()],
            ..Config::default()
        };
        let enumerator = WindowEnumerator::new(
            Box::new(FixedWindows(vec!["Task Switching", "Program Manager", "Paint"])),
            config.window_denylist(),
        );
        assert_eq!(enumerator.list_windows().unwrap(), vec!["Paint"]);
        assert!(enumerator.denylist().iter().any(|t| t == "keytime64"));
    }

    #[test]
    fn test_source_errors_propagate() {
        let enumerator = WindowEnumerator::new(Box::new(BrokenWindows), Vec::new());
        assert!(matches!(
            enumerator.list_windows(),
            Err(KeytimeError::WindowEnumeration(_))
        ));
    }

    #[test]
    #[cfg_attr(not(feature = "system-tests"), ignore)]
    fn test_system_windows_never_include_own_title() {
        let enumerator = WindowEnumerator::from_config(&Config::default());
        let titles = enumerator.list_windows().unwrap();
        assert!(titles.iter().all(|t| !t.is_empty() && t != crate::APP_TITLE));
    }
}
