//! Layout decisions shared by the views.
//!
//! Width thresholds and panel sizes live here so render code stays free of
//! magic numbers.

use ratatui::layout::{Constraint, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 80 cols: split pane or small terminal
    Compact,
    /// 80-119 cols
    Normal,
    /// 120+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=79 => Breakpoint::Compact,
            80..=119 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }
}

/// Sidebar column: fixed on wide terminals, proportional otherwise
pub fn sidebar_constraint(width: u16) -> Constraint {
    if Breakpoint::from_width(width).at_least(Breakpoint::Wide) {
        Constraint::Length(36)
    } else {
        Constraint::Percentage(40)
    }
}

/// Activity log rows, including borders
pub fn logs_height(height: u16) -> u16 {
    if height >= 40 {
        7
    } else {
        5
    }
}

/// Center a `width` x `height` box inside `area`, shrinking it to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
