// Status bar component
//
// Key hints at the bottom, shortened on narrow terminals.

use crate::tui::app::{App, Focus, Screen};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Hint for what Enter does in the focused widget
fn enter_hint(focus: Focus) -> &'static str {
    match focus {
        Focus::Username | Focus::Password => "Enter sign in",
        Focus::Search => "Enter go to list │ Esc clear",
        Focus::Customers => "↑↓ move │ Enter open",
        Focus::CustomerName | Focus::CustomerEmail | Focus::PurchaseHistory => {
            "Enter add customer"
        }
        Focus::InteractionType | Focus::InteractionDetails => "Enter log interaction",
    }
}

pub fn status_text(app: &App, width: u16) -> String {
    let bp = Breakpoint::from_width(width);
    let enter = enter_hint(app.focus);

    match app.screen() {
        Screen::Login => format!(" Tab next field │ {} │ Ctrl-C quit", enter),
        Screen::Main if !bp.at_least(Breakpoint::Wide) => format!(
            " {} │ F2 chart F3 load F4 recs F5 refresh F6 mail F10 out │ ^C",
            enter
        ),
        Screen::Main => format!(
            " Tab focus │ {} │ F2 analytics │ F3 load analytics │ F4 recommendations │ \
             F5 refresh │ F6 send coupon │ F10 logout │ Ctrl-C quit",
            enter
        ),
    }
}

/// Render the status bar with key hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
