//! Built-in background presets.

use ratatui::style::Color;

/// A selectable background swatch.
///
/// Presets are applied live and never persisted; dark mode is the only
/// presentation state that survives a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundPreset {
    /// Display name shown next to the swatch control.
    pub name: &'static str,
    /// Background color.
    pub color: Color,
    /// Accent color that reads well on this background.
    pub accent: Color,
}

/// The fixed set of background presets, in display order.
pub fn builtin_backgrounds() -> &'static [BackgroundPreset] {
    &[
        BackgroundPreset {
            name: "indigo",
            color: Color::Rgb(30, 27, 75),
            accent: Color::Rgb(129, 140, 248),
        },
        BackgroundPreset {
            name: "ocean",
            color: Color::Rgb(12, 74, 110),
            accent: Color::Rgb(125, 211, 252),
        },
        BackgroundPreset {
            name: "forest",
            color: Color::Rgb(20, 83, 45),
            accent: Color::Rgb(134, 239, 172),
        },
        BackgroundPreset {
            name: "sunset",
            color: Color::Rgb(124, 45, 18),
            accent: Color::Rgb(253, 186, 116),
        },
        BackgroundPreset {
            name: "rose",
            color: Color::Rgb(136, 19, 55),
            accent: Color::Rgb(251, 113, 133),
        },
    ]
}
