use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::i18n::Translator;
use crate::overview::{Panel, overview_panel_info};
use crate::tui::theme::flexoki;
use crate::tui::to_color;

/// Checklist of overview panels with the highlighted panel's tooltip below it.
pub fn render_panel_list(
    frame: &mut Frame,
    area: Rect,
    t: &impl Translator,
    panels: &[Panel],
    limit: Option<&str>,
    metric_type: &str,
    list_state: &mut ListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let infos: Vec<_> = panels
        .iter()
        .map(|panel| overview_panel_info(t, panel.id, limit, metric_type))
        .collect();

    let items: Vec<ListItem> = panels
        .iter()
        .zip(&infos)
        .map(|(panel, info)| {
            let mark = if panel.is_selected { "[x] " } else { "[ ] " };
            let mut spans = vec![Span::raw(mark), Span::raw(info.title.clone())];
            if let Some(chart_type) = &info.chart_type {
                spans.push(Span::styled(
                    format!(" ({chart_type})"),
                    Style::default().fg(to_color(flexoki::BASE_500)),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(t.t("Manage panels", &[])),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_stateful_widget(list, chunks[0], list_state);

    let tooltip = list_state
        .selected()
        .and_then(|i| infos.get(i))
        .and_then(|info| info.tooltip.clone())
        .unwrap_or_default();
    let help = Paragraph::new(tooltip)
        .style(Style::default().fg(to_color(flexoki::YELLOW_400)))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[1]);
}
