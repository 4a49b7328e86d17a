// Customer sidebar
//
// Search field, the filtered customer list and the new-customer form.

use super::text_field;
use crate::tui::app::{App, Focus};
use crate::util::truncate_display;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(6),
        ])
        .split(area);

    render_search(f, chunks[0], app);
    render_list(f, chunks[1], app);
    render_new_customer(f, chunks[2], app);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.panel_border(focused));
    let line = text_field::line(
        "Search",
        &app.store.view().search,
        focused,
        false,
        area.width.saturating_sub(2),
        &app.theme,
    );
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Customers;
    let customers = app.store.customers();
    let visible = app.store.visible_customers();
    let selected = app.store.selected_id();
    let width = area.width.saturating_sub(4) as usize;

    let title = if customers.is_loading() {
        format!(" Customers {} ", app.spinner_char())
    } else if app.store.view().search.is_empty() {
        format!(" Customers ({}) ", customers.value().len())
    } else {
        format!(" Customers ({}/{}) ", visible.len(), customers.value().len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.panel_border(focused))
        .title(title);

    if visible.is_empty() {
        let message = if customers.error().is_some() {
            "Could not load customers (F5 to retry)"
        } else if customers.is_loading() {
            "Loading…"
        } else if !app.store.view().search.is_empty() {
            "No matches"
        } else {
            "No customers yet"
        };
        f.render_widget(
            Paragraph::new(Line::styled(message, theme.muted_style())).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|customer| {
            let marker = if Some(customer.id) == selected { "● " } else { "  " };
            let label = truncate_display(&customer.name, width.saturating_sub(2));
            ListItem::new(format!("{marker}{label}")).style(theme.base_style())
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.list_cursor));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected_style());
    f.render_stateful_widget(list, area, &mut state);
}

fn render_new_customer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let form = app.store.customer_form();
    let focused = matches!(
        app.focus,
        Focus::CustomerName | Focus::CustomerEmail | Focus::PurchaseHistory
    );
    let title = if form.pending {
        format!(" New customer {} ", app.spinner_char())
    } else {
        " New customer ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.panel_border(focused))
        .title(title);

    let width = area.width.saturating_sub(2);
    let field = |label: &'static str, value: &str, target: Focus| {
        text_field::line(label, value, app.focus == target, false, width, theme)
    };
    let lines = vec![
        field("Name     ", &form.name, Focus::CustomerName),
        field("Email    ", &form.email, Focus::CustomerEmail),
        field("Purchases", &form.purchase_history, Focus::PurchaseHistory),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}
