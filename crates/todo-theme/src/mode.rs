//! Light/dark mode.

use serde::{Deserialize, Serialize};

/// Whole-screen color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dark text on a light background (default).
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Mode {
    /// The opposite mode.
    pub fn toggled(&self) -> Mode {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is dark mode.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph for the mode toggle control. Shows what pressing the toggle
    /// switches to: a moon while light, a sun while dark.
    pub fn toggle_glyph(&self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode() {
        assert_eq!(Mode::default(), Mode::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Light.toggled().toggled(), Mode::Light);
    }

    #[test]
    fn test_toggle_glyph_mirrors_state() {
        assert_eq!(Mode::Light.toggle_glyph(), "☾");
        assert_eq!(Mode::Dark.toggle_glyph(), "☀");
    }

    #[test]
    fn test_display() {
        assert_eq!(Mode::Light.to_string(), "light");
        assert_eq!(Mode::Dark.to_string(), "dark");
    }
}
