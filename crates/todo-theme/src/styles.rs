//! Semantic style sets.

use crate::mode::Mode;
use ratatui::style::{Color, Modifier, Style};

/// Semantic colors for one mode, consumed by the UI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSet {
    pub bg: Color,
    pub fg: Color,
    pub fg_muted: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub border: Color,
    /// Badge colors for the three priority levels.
    pub priority_low: Color,
    pub priority_medium: Color,
    pub priority_high: Color,
    pub success: Color,
    pub error: Color,
}

impl StyleSet {
    /// Base styles for a mode, before any background preset is applied.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Dark => Self {
                bg: Color::Rgb(26, 27, 38),
                fg: Color::Rgb(192, 202, 245),
                fg_muted: Color::Rgb(86, 95, 137),
                accent: Color::Rgb(122, 162, 247),
                selection_bg: Color::Rgb(65, 72, 104),
                border: Color::Rgb(65, 72, 104),
                priority_low: Color::Rgb(158, 206, 106),
                priority_medium: Color::Rgb(224, 175, 104),
                priority_high: Color::Rgb(247, 118, 142),
                success: Color::Rgb(158, 206, 106),
                error: Color::Rgb(247, 118, 142),
            },
            Mode::Light => Self {
                bg: Color::Rgb(239, 241, 245),
                fg: Color::Rgb(46, 52, 64),
                fg_muted: Color::Rgb(140, 143, 161),
                accent: Color::Rgb(30, 102, 245),
                selection_bg: Color::Rgb(204, 208, 218),
                border: Color::Rgb(172, 176, 190),
                priority_low: Color::Rgb(64, 160, 43),
                priority_medium: Color::Rgb(223, 142, 29),
                priority_high: Color::Rgb(210, 15, 57),
                success: Color::Rgb(64, 160, 43),
                error: Color::Rgb(210, 15, 57),
            },
        }
    }

    /// Document-wide base style.
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Secondary text (schedule lines, hints).
    pub fn muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Highlighted interactive element.
    pub fn accent(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Row under the cursor.
    pub fn selected(&self) -> Style {
        Style::default().bg(self.selection_bg)
    }

    /// Completed task text.
    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.fg_muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    /// Badge color for a priority rank (0 = low, 1 = medium, 2 = high).
    pub fn priority_color(&self, rank: usize) -> Color {
        match rank {
            0 => self.priority_low,
            1 => self.priority_medium,
            _ => self.priority_high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_have_distinct_backgrounds() {
        assert_ne!(
            StyleSet::for_mode(Mode::Light).bg,
            StyleSet::for_mode(Mode::Dark).bg
        );
    }

    #[test]
    fn test_completed_is_crossed_out() {
        let set = StyleSet::for_mode(Mode::Dark);
        assert!(set
            .completed()
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }
}
