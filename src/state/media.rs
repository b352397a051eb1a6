//! Media queries: reduced-motion preference and the width breakpoint.

use spark_signals::{Signal, signal};

/// Environment variable that forces the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "SPARK_FOLIO_REDUCED_MOTION";

/// Default `md` breakpoint in columns.
pub const DEFAULT_BREAKPOINT: u16 = 80;

/// Parse a reduced-motion override (`1`/`true`/`yes`/`on` and their negatives).
pub fn parse_reduced_motion(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reduced-motion override from the process environment, if set and valid.
pub fn reduced_motion_from_env() -> Option<bool> {
    std::env::var(REDUCED_MOTION_ENV)
        .ok()
        .and_then(|v| parse_reduced_motion(&v))
}

/// Viewport media state. Clones share the same signals.
#[derive(Clone)]
pub struct Media {
    reduced_motion: Signal<bool>,
    width: Signal<u16>,
    height: Signal<u16>,
    breakpoint: u16,
}

impl Media {
    pub fn new(width: u16, height: u16, breakpoint: u16, reduced_motion: bool) -> Self {
        Self {
            reduced_motion: signal(reduced_motion),
            width: signal(width),
            height: signal(height),
            breakpoint,
        }
    }

    pub fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion.get()
    }

    pub fn set_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.set(reduced);
    }

    pub fn width(&self) -> u16 {
        self.width.get()
    }

    pub fn height(&self) -> u16 {
        self.height.get()
    }

    /// Returns true if the size changed.
    pub fn resize(&self, width: u16, height: u16) -> bool {
        let changed = self.width.get() != width || self.height.get() != height;
        if changed {
            self.width.set(width);
            self.height.set(height);
        }
        changed
    }

    pub fn breakpoint(&self) -> u16 {
        self.breakpoint
    }

    /// True at or above the `md` breakpoint.
    pub fn is_md(&self) -> bool {
        self.width() >= self.breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reduced_motion() {
        assert_eq!(parse_reduced_motion("1"), Some(true));
        assert_eq!(parse_reduced_motion(" TRUE "), Some(true));
        assert_eq!(parse_reduced_motion("off"), Some(false));
        assert_eq!(parse_reduced_motion("maybe"), None);
    }

    #[test]
    fn test_breakpoint() {
        let media = Media::new(79, 24, DEFAULT_BREAKPOINT, false);
        assert!(!media.is_md());
        assert!(media.resize(80, 24));
        assert!(media.is_md());
        assert!(!media.resize(80, 24));
    }
}
