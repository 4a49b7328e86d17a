// Analytics panel
//
// Interaction counts per customer as a bar chart. The panel is toggled with
// F2; data is fetched only on F3.

use crate::api::AnalyticsEntry;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::truncate_display;
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Bars in the order the backend sent them, labels cut to the bar width
fn bars<'a>(entries: &[AnalyticsEntry], bar_width: u16, theme: &Theme) -> Vec<Bar<'a>> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let color = if idx % 2 == 0 {
                theme.chart_primary
            } else {
                theme.chart_secondary
            };
            Bar::default()
                .label(Line::from(truncate_display(&entry.name, bar_width as usize)))
                .value(entry.interaction_count)
                .style(Style::default().fg(color))
        })
        .collect()
}

/// Bar width that fits every entry, between 3 and 12 columns
fn bar_width(area_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 3;
    }
    let inner = area_width.saturating_sub(2) as usize;
    let per_bar = inner / count; // includes the one-column gap
    (per_bar.saturating_sub(1) as u16).clamp(3, 12)
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let analytics = app.store.analytics();
    let title = if analytics.is_loading() {
        format!(" Interactions per customer {} ", app.spinner_char())
    } else {
        " Interactions per customer ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title(title);

    let entries = analytics.value();
    if entries.is_empty() {
        let message = if analytics.is_loading() {
            "Loading…"
        } else if analytics.error().is_some() {
            "Could not load analytics (F3 to retry)"
        } else if analytics.is_fetched() {
            "No interactions recorded yet"
        } else {
            "Press F3 to load analytics"
        };
        f.render_widget(
            Paragraph::new(Line::styled(message, theme.muted_style())).block(block),
            area,
        );
        return;
    }

    let width = bar_width(area.width, entries.len());
    let bars = bars(entries, width, theme);
    let max_value = entries
        .iter()
        .map(|e| e.interaction_count)
        .max()
        .unwrap_or(1)
        .max(1);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .max(max_value)
        .style(Style::default().fg(theme.foreground));

    f.render_widget(chart, area);
}
