//! Plain-text rendering of the table body and the panel catalogue.

use crate::i18n::Translator;
use crate::overview::{Panel, overview_panel_info};
use crate::table::{Column, EmptyState, ErrorState, HeaderCell, SortDirection, TableBody};
use std::fmt::Write as _;

const MIN_WIDTH: usize = 6;

pub fn render_table<R>(
    t: &impl Translator,
    header: &[HeaderCell],
    body: &TableBody<'_, R>,
    columns: &[Column<R>],
) -> String {
    let mut out = String::new();

    match body {
        TableBody::Error(state) => {
            let _ = writeln!(out, "{}", t.t(ErrorState::TITLE, &[]));
            let _ = writeln!(out, "{}", state.message);
        }
        TableBody::Loading => {
            let _ = writeln!(out, "{}", t.t("Loading...", &[]));
        }
        TableBody::Empty(_) => {
            let _ = writeln!(out, "{}", t.t(EmptyState::TITLE, &[]));
            let _ = writeln!(out, "{}", t.t(EmptyState::BODY, &[]));
            let _ = writeln!(out, "[{}]", t.t(EmptyState::ACTION, &[]));
        }
        TableBody::Rows(_) => {
            let rows = body.render_rows(columns, |flow, columns| {
                columns.iter().map(|c| c.cell(flow)).collect::<Vec<_>>()
            });
            let labels: Vec<String> = header.iter().map(header_label).collect();

            let widths: Vec<usize> = labels
                .iter()
                .enumerate()
                .map(|(i, label)| {
                    rows.iter()
                        .filter_map(|row| row.get(i))
                        .map(|cell| cell.chars().count())
                        .chain([label.chars().count(), MIN_WIDTH])
                        .max()
                        .unwrap_or(MIN_WIDTH)
                })
                .collect();

            push_line(&mut out, &labels, &widths);
            for row in &rows {
                push_line(&mut out, row, &widths);
            }
        }
    }

    out
}

fn header_label(cell: &HeaderCell) -> String {
    match cell.sort {
        Some(SortDirection::Asc) => format!("{} ▲", cell.label),
        Some(SortDirection::Desc) => format!("{} ▼", cell.label),
        None => cell.label.clone(),
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_panels(
    t: &impl Translator,
    panels: &[Panel],
    limit: Option<&str>,
    metric_type: &str,
) -> String {
    let mut out = String::new();
    for panel in panels {
        let info = overview_panel_info(t, panel.id, limit, metric_type);
        let mark = if panel.is_selected { "x" } else { " " };
        let _ = write!(out, "[{mark}] {:<18} {}", panel.id.as_str(), info.title);
        if let Some(chart_type) = &info.chart_type {
            let _ = write!(out, " ({chart_type})");
        }
        out.push('\n');
        if let Some(tooltip) = &info.tooltip {
            let _ = writeln!(out, "    {tooltip}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Passthrough;
    use crate::overview::default_overview_panels;
    use crate::table::{NetflowTable, TableInput};

    type Named = (u32, &'static str);

    fn clear() {}

    static CLEAR: fn() = clear;

    fn columns() -> Vec<Column<Named>> {
        vec![
            Column::by_key("n", "N", |r: &Named| r.0, |r: &Named| r.0.to_string()),
            Column::by_key("name", "Name", |r: &Named| r.1, |r: &Named| r.1.to_string()),
        ]
    }

    #[test]
    fn renders_sorted_rows_with_header_marker() {
        let flows: Vec<Named> = vec![(2, "two"), (1, "one")];
        let columns = columns();
        let mut table = NetflowTable::new();
        table.on_sort(0, SortDirection::Asc);

        let body = table.body(TableInput::new(&flows, &columns, &CLEAR));
        let text = render_table(&Passthrough, &table.header(&columns), &body, &columns);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("N ▲"));
        assert!(lines[1].starts_with("1 "));
        assert!(lines[1].ends_with("one"));
        assert!(lines[2].ends_with("two"));
    }

    #[test]
    fn renders_empty_and_error_states() {
        let columns = columns();
        let table = NetflowTable::new();
        let header = table.header(&columns);

        let empty = table.body(TableInput::new(&[], &columns, &CLEAR));
        let text = render_table(&Passthrough, &header, &empty, &columns);
        assert!(text.contains("No results found"));
        assert!(text.contains("[Clear all filters]"));

        let error = table.body(TableInput::new(&[], &columns, &CLEAR).error(Some("boom")));
        let text = render_table(&Passthrough, &header, &error, &columns);
        assert_eq!(text, "Unable to get flows\nboom\n");
    }

    #[test]
    fn renders_loading_state() {
        let flows: Vec<Named> = vec![(1, "one")];
        let columns = columns();
        let table = NetflowTable::new();

        let body = table.body(TableInput::new(&flows, &columns, &CLEAR).loading(true));
        let text = render_table(&Passthrough, &table.header(&columns), &body, &columns);
        assert_eq!(text, "Loading...\n");
    }

    #[test]
    fn renders_panel_catalogue() {
        let text = render_panels(&Passthrough, &default_overview_panels(false), Some("5"), "bytes");
        let first = text.lines().next().unwrap();

        assert!(first.starts_with("[x] top_avg_donut"));
        assert!(first.contains("Top 5 average rates (donut)"));
        assert!(text.contains("[ ] top_bar "));
        assert!(text.contains("    The average rate over the selected interval"));
    }

    #[test]
    fn panel_catalogue_takes_a_label_limit() {
        let text = render_panels(&Passthrough, &default_overview_panels(false), Some("all"), "packets");
        assert!(text.contains("[x] top_lines          Top all packets rates (lines)"));
    }
}
