// Login view
//
// Title bar, the sign-in form and a one-line hint footer.

use crate::tui::app::App;
use crate::tui::components::{self, login_form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(2),
        ])
        .split(area);

    components::render_title(f, chunks[0], app);
    login_form::render(f, chunks[1], app);
    components::render_status(f, chunks[2], app);
}
