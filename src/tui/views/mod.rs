// Views module - screen-level rendering logic
//
// Two screens:
// - Login: centered sign-in form
// - Main: sidebar, customer detail, optional analytics, activity log
//
// This module dispatches to the appropriate view based on the session.

mod login;
mod main_view;

use super::app::{App, Screen};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, area);

    match app.screen() {
        Screen::Login => login::render(f, area, app),
        Screen::Main => main_view::render(f, area, app),
    }

    // Toast on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, area, &app.theme);
    }
}
