use ratatui::style::{Color, Modifier, Style};

use crate::ledger::BudgetLevel;

/// Colors for one appearance. The profile's dark-mode flag picks which.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    pub(crate) header_bg: Color,
    pub(crate) header_fg: Color,
    pub(crate) accent: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
    pub(crate) surface: Color,
    pub(crate) text: Color,
    pub(crate) text_dim: Color,
    pub(crate) overlay: Color,
    pub(crate) command_bg: Color,
}

pub(crate) const DARK: Palette = Palette {
    header_bg: Color::Rgb(17, 24, 39),
    header_fg: Color::Rgb(229, 231, 235),
    accent: Color::Rgb(34, 197, 94),
    green: Color::Rgb(74, 222, 128),
    red: Color::Rgb(248, 113, 113),
    yellow: Color::Rgb(250, 204, 21),
    surface: Color::Rgb(31, 41, 55),
    text: Color::Rgb(229, 231, 235),
    text_dim: Color::Rgb(156, 163, 175),
    overlay: Color::Rgb(75, 85, 99),
    command_bg: Color::Rgb(11, 15, 25),
};

pub(crate) const LIGHT: Palette = Palette {
    header_bg: Color::Rgb(240, 253, 244),
    header_fg: Color::Rgb(20, 83, 45),
    accent: Color::Rgb(22, 163, 74),
    green: Color::Rgb(21, 128, 61),
    red: Color::Rgb(220, 38, 38),
    yellow: Color::Rgb(202, 138, 4),
    surface: Color::Rgb(229, 231, 235),
    text: Color::Rgb(17, 24, 39),
    text_dim: Color::Rgb(107, 114, 128),
    overlay: Color::Rgb(209, 213, 219),
    command_bg: Color::Rgb(249, 250, 251),
};

pub(crate) fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}

impl Palette {
    pub(crate) fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn title_style(&self) -> Style {
        Style::default()
            .fg(self.text_dim)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::default().fg(self.overlay)
    }

    pub(crate) fn selected_style(&self) -> Style {
        Style::default().fg(self.header_bg).bg(self.accent)
    }

    pub(crate) fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub(crate) fn dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub(crate) fn expense_style(&self) -> Style {
        Style::default().fg(self.red)
    }

    pub(crate) fn command_bar_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.command_bg)
    }

    pub(crate) fn status_bar_style(&self) -> Style {
        Style::default().fg(self.text_dim).bg(self.surface)
    }

    /// Balance color: green while healthy, amber in caution, red when critical.
    pub(crate) fn level_color(&self, level: BudgetLevel) -> Color {
        match level {
            BudgetLevel::Healthy => self.green,
            BudgetLevel::Caution => self.yellow,
            BudgetLevel::Critical => self.red,
        }
    }
}
