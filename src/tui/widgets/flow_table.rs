use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState};

use crate::flow::FlowRecord;
use crate::i18n::Translator;
use crate::table::{Column, EmptyState, ErrorState, HeaderCell, SortDirection, TableBody};
use crate::tui::theme::flexoki;
use crate::tui::to_color;

fn column_width(id: &str) -> Constraint {
    match id {
        "time" => Constraint::Length(16),
        "src_ip" | "dst_ip" => Constraint::Min(15),
        "src_port" | "dst_port" => Constraint::Length(9),
        "protocol" => Constraint::Length(9),
        "bytes" => Constraint::Length(12),
        "packets" => Constraint::Length(9),
        _ => Constraint::Min(8),
    }
}

fn header_cell(index: usize, cell: &HeaderCell) -> Cell<'static> {
    let arrow = match cell.sort {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    };
    // Columns 1-9 are reachable from the keyboard.
    let text = if index < 9 {
        format!("{}:{}{}", index + 1, cell.label, arrow)
    } else {
        format!("{}{}", cell.label, arrow)
    };
    Cell::from(text).style(Style::default().add_modifier(Modifier::BOLD))
}

/// Draws whichever body state the table produced.
#[allow(clippy::too_many_arguments)]
pub fn render_flow_table(
    frame: &mut Frame,
    area: Rect,
    t: &impl Translator,
    header: &[HeaderCell],
    body: &TableBody<'_, FlowRecord>,
    columns: &[Column<FlowRecord>],
    progress: f32,
    table_state: &mut TableState,
) {
    let block = Block::default().borders(Borders::ALL).title(t.t("Flows", &[]));

    match body {
        TableBody::Error(state) => {
            let lines = vec![
                Line::from(Span::styled(
                    t.t(ErrorState::TITLE, &[]),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(state.message.to_string()),
            ];
            let p = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().fg(to_color(flexoki::RED_400)))
                .block(block);
            frame.render_widget(p, area);
        }
        TableBody::Loading => {
            let gauge_area = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Percentage(45),
                    Constraint::Length(3),
                    Constraint::Percentage(45),
                ])
                .split(area)[1];

            let gauge = Gauge::default()
                .block(Block::default().borders(Borders::ALL).title(t.t("Loading flows", &[])))
                .gauge_style(Style::default().fg(to_color(flexoki::BLUE_400)))
                .percent((progress.clamp(0.0, 1.0) * 100.0) as u16);
            frame.render_widget(gauge, gauge_area);
        }
        TableBody::Empty(_) => {
            let lines = vec![
                Line::from(Span::styled(
                    t.t(EmptyState::TITLE, &[]),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(t.t(EmptyState::BODY, &[])),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[c] {}", t.t(EmptyState::ACTION, &[])),
                    Style::default().fg(to_color(flexoki::BLUE_400)),
                )),
            ];
            let p = Paragraph::new(lines).alignment(Alignment::Center).block(block);
            frame.render_widget(p, area);
        }
        TableBody::Rows(_) => {
            let header_row = Row::new(
                header
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| header_cell(i, cell)),
            )
            .height(1)
            .bg(to_color(flexoki::BLUE_600));

            let rows = body.render_rows(columns, |flow, columns| {
                Row::new(columns.iter().map(|c| Cell::from(c.cell(flow))))
            });
            let widths: Vec<Constraint> = columns.iter().map(|c| column_width(c.id())).collect();

            let table = Table::new(rows, widths)
                .header(header_row)
                .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
                .highlight_symbol(">> ")
                .block(block);
            frame.render_stateful_widget(table, area, table_state);
        }
    }
}
