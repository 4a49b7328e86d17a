// Theme system for the TUI
//
// Three built-in palettes selected by name from the config file.
// Each theme defines colors for all UI elements.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Resolve a config value; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        let wanted = name.trim().to_lowercase();
        match Self::all().iter().find(|kind| kind.name() == wanted) {
            Some(kind) => *kind,
            None => {
                tracing::warn!(theme = %wanted, "Unknown theme, using dark");
                ThemeKind::Dark
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Nord => "nord",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Notices
    pub success: Color,
    pub error: Color,
    pub info: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,

    // Analytics chart
    pub chart_primary: Color,
    pub chart_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,

            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            success: Color::Green,
            error: Color::Red,
            info: Color::LightBlue,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,

            chart_primary: Color::Cyan,
            chart_secondary: Color::Magenta,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            border_type: BorderType::Plain,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            highlight: Color::Rgb(184, 134, 11), // Dark goldenrod

            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            success: Color::Green,
            error: Color::Red,
            info: Color::Blue,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,

            chart_primary: Color::Blue,
            chart_secondary: Color::Magenta,
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),
            foreground: Color::Rgb(236, 239, 244),
            muted: Color::Rgb(76, 86, 106),
            border: Color::Rgb(76, 86, 106),
            border_focused: Color::Rgb(136, 192, 208), // Frost
            border_type: BorderType::Rounded,

            title: Color::Rgb(136, 192, 208),
            status_bar: Color::Rgb(163, 190, 140),
            highlight: Color::Rgb(235, 203, 139),

            selected_bg: Color::Rgb(67, 76, 94),
            selected_fg: Color::Rgb(235, 203, 139),

            success: Color::Rgb(163, 190, 140),
            error: Color::Rgb(191, 97, 106),
            info: Color::Rgb(129, 161, 193),

            log_error: Color::Rgb(191, 97, 106),
            log_warn: Color::Rgb(235, 203, 139),
            log_info: Color::Rgb(129, 161, 193),
            log_debug: Color::Rgb(76, 86, 106),
            log_trace: Color::Rgb(59, 66, 82),

            chart_primary: Color::Rgb(136, 192, 208),
            chart_secondary: Color::Rgb(180, 142, 173),
        }
    }

    // Helper methods for creating styles

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style for a panel, brighter when it has focus
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}
