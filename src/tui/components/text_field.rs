//! Single-line labelled text input

use crate::tui::theme::Theme;
use crate::util::{display_width, mask, truncate_display};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

/// One input line: `label value▏`, with a cursor when focused
pub fn line<'a>(
    label: &'a str,
    value: &str,
    focused: bool,
    secret: bool,
    width: u16,
    theme: &Theme,
) -> Line<'a> {
    let shown = if secret { mask(value) } else { value.to_string() };

    // Keep the tail visible while typing past the edge
    let room = (width as usize).saturating_sub(display_width(label) + 3);
    let shown = if display_width(&shown) > room && room > 0 {
        let reversed: String = shown.chars().rev().collect();
        truncate_display(&reversed, room).chars().rev().collect()
    } else {
        shown
    };

    let label_style = if focused {
        theme.title_style()
    } else {
        theme.muted_style()
    };
    let value_style = if focused {
        theme.base_style().add_modifier(Modifier::UNDERLINED)
    } else {
        theme.base_style()
    };

    let mut spans = vec![
        Span::styled(format!("{label} "), label_style),
        Span::styled(shown, value_style),
    ];
    if focused {
        spans.push(Span::styled("▏", theme.title_style()));
    }
    Line::from(spans)
}
