// Title bar component
//
// Renders the app name, the backend being talked to and the signed-in user.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
///
/// Shows the spinner while any request is outstanding, then the server URL
/// and `user (role)` on the right.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let busy = if app.is_busy() {
        format!(" {}", app.spinner_char())
    } else {
        String::new()
    };

    let title_text = format!(" Smart Connect CRM{} ──── {}", busy, app.api_url);

    let identity = match app.store.session() {
        Some(session) => match &session.role {
            Some(role) => format!(" {} ({}) ", session.username, role),
            None => format!(" {} ", session.username),
        },
        None => " signed out ".to_string(),
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(identity).right_aligned()),
        );

    f.render_widget(title, area);
}
