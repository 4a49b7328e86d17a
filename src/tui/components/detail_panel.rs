//! Detail panel component
//!
//! Everything about the selected customer:
//! - Contact fields and purchase history
//! - Recommendations (fetched on demand with F4)
//! - New-interaction form
//! - Interaction log, newest last, with local timestamps

use super::text_field;
use crate::store::Resource;
use crate::tui::app::{App, Focus};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn panel<'a>(title: String, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.panel_border(focused))
        .title(title)
}

/// Title with a spinner while the resource is loading
fn loading_title<T: Default>(name: &str, resource: &Resource<T>, app: &App) -> String {
    if resource.is_loading() {
        format!(" {} {} ", name, app.spinner_char())
    } else {
        format!(" {} ", name)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.store.selected_id().is_none() {
        let hint = Paragraph::new(Line::styled(
            "Select a customer from the list (Tab to the list, ↑↓, Enter)",
            app.theme.muted_style(),
        ))
        .wrap(Wrap { trim: true })
        .block(panel(" Customer ".to_string(), false, &app.theme));
        f.render_widget(hint, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    render_customer(f, chunks[0], app);
    render_recommendations(f, chunks[1], app);
    render_interaction_form(f, chunks[2], app);
    render_interactions(f, chunks[3], app);
}

fn render_customer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let detail = app.store.detail();
    let block = panel(loading_title("Customer", detail, app), false, theme);

    let lines = match detail.value() {
        Some(customer) => {
            let label = |text: &'static str| Span::styled(text, theme.muted_style());
            vec![
                Line::from(Span::styled(customer.name.clone(), theme.title_style())),
                Line::from(vec![
                    label("Email     "),
                    Span::raw(customer.email.clone().unwrap_or_else(|| "-".into())),
                ]),
                Line::from(vec![
                    label("Purchases "),
                    Span::raw(
                        customer
                            .purchase_history
                            .clone()
                            .unwrap_or_else(|| "-".into()),
                    ),
                ]),
                Line::from(vec![label("ID        "), Span::raw(customer.id.to_string())]),
            ]
        }
        None if detail.is_loading() => vec![Line::styled("Loading…", theme.muted_style())],
        None => vec![Line::styled(
            detail.error().unwrap_or("No details"),
            theme.error_style(),
        )],
    };

    f.render_widget(
        Paragraph::new(lines)
            .style(theme.base_style())
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_recommendations(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let recs = app.store.recommendations();
    let block = panel(loading_title("Recommendations", recs, app), false, theme);

    let lines: Vec<Line> = if !recs.value().is_empty() {
        recs.value()
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled("• ", theme.title_style()),
                    Span::raw(r.clone()),
                ])
            })
            .collect()
    } else if recs.is_loading() {
        vec![Line::styled("Loading…", theme.muted_style())]
    } else if recs.error().is_some() {
        vec![Line::styled(
            "Could not load recommendations",
            theme.error_style(),
        )]
    } else if recs.is_fetched() {
        vec![Line::styled(
            "No recommendations for this customer",
            theme.muted_style(),
        )]
    } else {
        vec![Line::styled(
            "Press F4 to get recommendations",
            theme.muted_style(),
        )]
    };

    f.render_widget(
        Paragraph::new(lines)
            .style(theme.base_style())
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

fn render_interaction_form(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let form = app.store.interaction_form();
    let focused = matches!(
        app.focus,
        Focus::InteractionType | Focus::InteractionDetails
    );
    let title = if form.pending {
        format!(" Log interaction {} ", app.spinner_char())
    } else {
        " Log interaction ".to_string()
    };
    let width = area.width.saturating_sub(2);
    let lines = vec![
        text_field::line(
            "Type   ",
            &form.kind,
            app.focus == Focus::InteractionType,
            false,
            width,
            theme,
        ),
        text_field::line(
            "Details",
            &form.details,
            app.focus == Focus::InteractionDetails,
            false,
            width,
            theme,
        ),
    ];
    f.render_widget(
        Paragraph::new(lines).block(panel(title, focused, theme)),
        area,
    );
}

fn render_interactions(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let interactions = app.store.interactions();
    let block = panel(loading_title("Interactions", interactions, app), false, theme);

    if interactions.value().is_empty() {
        let message = if interactions.is_loading() {
            "Loading…"
        } else if interactions.error().is_some() {
            "Could not load interactions"
        } else {
            "No interactions recorded"
        };
        f.render_widget(
            Paragraph::new(Line::styled(message, theme.muted_style())).block(block),
            area,
        );
        return;
    }

    // Newest at the bottom; show the tail when the log is longer than the panel
    let height = area.height.saturating_sub(2) as usize;
    let skip = interactions.value().len().saturating_sub(height);
    let items: Vec<ListItem> = interactions
        .value()
        .iter()
        .skip(skip)
        .map(|interaction| {
            let mut spans = vec![
                Span::styled(
                    format!("{}  ", interaction.display_timestamp()),
                    theme.muted_style(),
                ),
                Span::styled(
                    interaction.kind.clone(),
                    Style::default()
                        .fg(theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(details) = interaction.details.as_deref().filter(|d| !d.is_empty()) {
                spans.push(Span::raw(format!(": {details}")));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    f.render_widget(List::new(items).style(theme.base_style()).block(block), area);
}
