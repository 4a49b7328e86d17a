// Main view
//
// ┌ title ───────────────────────────────────────┐
// │ sidebar        │ detail                      │
// │ (search, list, │ (customer, recommendations, │
// │  new customer) │  interaction form, log)     │
// ├────────────────┴─────────────────────────────┤
// │ analytics (F2)                               │
// │ activity log                                 │
// └ key hints ───────────────────────────────────┘

use crate::tui::app::App;
use crate::tui::components::{self, analytics_panel, customer_list, detail_panel};
use crate::tui::layout;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let analytics_visible = app.store.view().analytics_visible;
    let logs_height = layout::logs_height(area.height);

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(16)];
    if analytics_visible {
        constraints.push(Constraint::Length(12));
    }
    constraints.push(Constraint::Length(logs_height));
    constraints.push(Constraint::Length(2));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    components::render_title(f, rows[0], app);
    render_body(f, rows[1], app);

    let mut next = 2;
    if analytics_visible {
        analytics_panel::render(f, rows[next], app);
        next += 1;
    }
    components::render_logs_panel(f, rows[next], app);
    components::render_status(f, rows[next + 1], app);
}

fn render_body(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([layout::sidebar_constraint(area.width), Constraint::Min(20)])
        .split(area);

    customer_list::render(f, columns[0], app);
    detail_panel::render(f, columns[1], app);
}
