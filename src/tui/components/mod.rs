// Components module - reusable UI building blocks
//
// Shell components are rendered on the main screen:
// - Title bar: server, user and role, busy spinner
// - Status bar: key hints for the focused widget
// - Logs panel: recent activity from the tracing buffer
//
// Content components render one region each and read straight from the store.

pub mod analytics_panel;
pub mod customer_list;
pub mod detail_panel;
pub mod login_form;
pub mod logs_panel;
pub mod status_bar;
pub mod text_field;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
