// Login form component
//
// Centered box with username and masked password. While the login request
// is outstanding the form shows a spinner; a rejected login shows the
// server's message inline.

use super::text_field;
use crate::tui::app::{App, Focus};
use crate::tui::layout::centered;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let login = app.store.login_state();
    let form_area = centered(area, 56, 11);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.panel_border(true))
        .title(" Sign in ")
        .title_style(theme.title_style());
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let width = rows[0].width;
    f.render_widget(
        Paragraph::new(text_field::line(
            "Username",
            &login.username,
            app.focus == Focus::Username,
            false,
            width,
            theme,
        )),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(text_field::line(
            "Password",
            &login.password,
            app.focus == Focus::Password,
            true,
            width,
            theme,
        )),
        rows[1],
    );

    let feedback = if login.is_pending() {
        Line::styled(
            format!("{} Signing in…", app.spinner_char()),
            Style::default().fg(theme.info),
        )
    } else if let Some(error) = &login.error {
        Line::styled(error.clone(), theme.error_style())
    } else {
        Line::styled("Enter to sign in", theme.muted_style())
    };
    f.render_widget(
        Paragraph::new(feedback).wrap(Wrap { trim: true }),
        rows[3],
    );
}
