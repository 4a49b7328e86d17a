//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::store::{Notice, NoticeLevel};
use crate::tui::theme::Theme;
use crate::util::display_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    pub level: NoticeLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Errors stay up longer than confirmations
    pub fn from_notice(notice: Notice) -> Self {
        let duration = match notice.level {
            NoticeLevel::Error => Duration::from_secs(5),
            NoticeLevel::Success | NoticeLevel::Info => Duration::from_secs(3),
        };
        Self {
            message: notice.message,
            level: notice.level,
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 1 line of text + borders, 2 chars of padding each side
        let width = (display_width(&self.message) as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let accent = match self.level {
            NoticeLevel::Error => theme.error,
            NoticeLevel::Success => theme.success,
            NoticeLevel::Info => theme.info,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
