use std::cell::Cell;
use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, ListState, Paragraph, TableState};
use tracing::{debug, info, warn};

use super::TuiConfig;
use super::widgets::{render_flow_table, render_panel_list};
use crate::flow::FlowRecord;
use crate::flow::filter::FlowFilter;
use crate::i18n::Passthrough;
use crate::loader::{FlowLoadController, FlowLoadStatus};
use crate::overview::Panel;
use crate::table::{Column, NetflowTable, TableBody, TableInput, default_columns};


struct AppState {
    flows: Vec<FlowRecord>,
    // Flows passing the current filter, in load order
    visible: Vec<FlowRecord>,
    columns: Vec<Column<FlowRecord>>,
    table: NetflowTable,
    table_state: TableState,
    filter: String,
    filter_mode: bool,
    loading: bool,
    progress: f32,
    error: Option<String>,
    panels: Vec<Panel>,
    panel_state: ListState,
    show_panels: bool,
    limit: Option<String>,
    metric: String,
}

impl AppState {
    fn new(config: &TuiConfig) -> Self {
        let mut panel_state = ListState::default();
        if !config.panels.is_empty() {
            panel_state.select(Some(0));
        }

        Self {
            flows: Vec::new(),
            visible: Vec::new(),
            columns: default_columns(),
            table: NetflowTable::with_sort(config.sort),
            table_state: TableState::default(),
            filter: config.filter.clone(),
            filter_mode: false,
            loading: true,
            progress: 0.0,
            error: None,
            panels: config.panels.clone(),
            panel_state,
            show_panels: false,
            limit: config.limit.clone(),
            metric: config.metric.clone(),
        }
    }

    fn set_flows(&mut self, flows: Vec<FlowRecord>) {
        self.flows = flows;
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = FlowFilter::new(&self.filter).apply(&self.flows);
        // Reset table selection when the row set changes
        let selected = if self.visible.is_empty() { None } else { Some(0) };
        self.table_state.select(selected);
        debug!(filter = %self.filter, visible = self.visible.len(), "Filter applied");
    }

    fn clear_filters(&mut self) {
        self.filter.clear();
        self.filter_mode = false;
        self.refilter();
        info!("All filters cleared");
    }

    /// Fires the empty state's clear action, if the table is showing it.
    fn trigger_clear_all_filters(&mut self) {
        let requested = Cell::new(false);
        {
            let clear = || requested.set(true);
            let input = TableInput::new(&self.visible, &self.columns, &clear)
                .loading(self.loading)
                .error(self.error.as_deref());
            if let TableBody::Empty(empty) = self.table.body(input) {
                empty.clear_all_filters();
            }
        }
        if requested.get() {
            self.clear_filters();
        }
    }

    fn sort_by_column(&mut self, index: usize) {
        if index >= self.columns.len() {
            return;
        }
        let (index, direction) = self.table.next_sort(index);
        self.table.on_sort(index, direction);
    }

    fn next_row(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < self.visible.len() => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn previous_row(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => self.visible.len() - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn next_panel(&mut self) {
        if self.panels.is_empty() {
            return;
        }
        let i = match self.panel_state.selected() {
            Some(i) if i + 1 < self.panels.len() => i + 1,
            _ => 0,
        };
        self.panel_state.select(Some(i));
    }

    fn previous_panel(&mut self) {
        if self.panels.is_empty() {
            return;
        }
        let i = match self.panel_state.selected() {
            Some(0) | None => self.panels.len() - 1,
            Some(i) => i - 1,
        };
        self.panel_state.select(Some(i));
    }

    fn toggle_panel(&mut self) {
        if let Some(panel) = self
            .panel_state
            .selected()
            .and_then(|i| self.panels.get_mut(i))
        {
            panel.is_selected = !panel.is_selected;
            debug!(panel = %panel.id, selected = panel.is_selected, "Panel toggled");
        }
    }
}

pub fn run_tui(config: TuiConfig) -> Result<()> {
    info!(path = ?config.path, "Starting TUI application");
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut loader = FlowLoadController::new(config.path.clone());
    let mut app = AppState::new(&config);
    let translator = Passthrough;
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(100);

    loop {
        match loader.poll() {
            FlowLoadStatus::Loading { progress } => {
                app.progress = progress;
            }
            FlowLoadStatus::Ready { flows } => {
                info!(flows = flows.len(), "TUI loader ready");
                app.set_flows(flows);
            }
            FlowLoadStatus::Error(err) => {
                app.error = Some(err);
                warn!("TUI loader failed");
            }
            FlowLoadStatus::Idle => {}
        }
        app.loading = loader.is_loading();

        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([
                    Constraint::Length(3), // Filter
                    Constraint::Min(0),    // Table and panels
                    Constraint::Length(3), // Footer
                ])
                .split(f.area());

            let filter_title = if app.filter_mode {
                "Filter (ESC to exit)"
            } else {
                "Filter"
            };
            let filter_display = if app.filter.is_empty() && !app.filter_mode {
                "Type / to start filtering...".to_string()
            } else {
                app.filter.clone()
            };
            let filter_widget = Paragraph::new(filter_display)
                .block(Block::default().borders(Borders::ALL).title(filter_title));
            f.render_widget(filter_widget, chunks[0]);

            let main = if app.show_panels {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .split(chunks[1])
            } else {
                Layout::default()
                    .constraints([Constraint::Min(0)])
                    .split(chunks[1])
            };

            let noop = || {};
            let input = TableInput::new(&app.visible, &app.columns, &noop)
                .loading(app.loading)
                .error(app.error.as_deref());
            let body = app.table.body(input);
            let header = app.table.header(&app.columns);
            render_flow_table(
                f,
                main[0],
                &translator,
                &header,
                &body,
                &app.columns,
                app.progress,
                &mut app.table_state,
            );

            if app.show_panels {
                render_panel_list(
                    f,
                    main[1],
                    &translator,
                    &app.panels,
                    app.limit.as_deref(),
                    &app.metric,
                    &mut app.panel_state,
                );
            }

            let instructions = if app.filter_mode {
                Paragraph::new("Type to filter | ESC/Enter: Exit filter")
            } else if app.show_panels {
                Paragraph::new("↑/↓: Select panel | Space: Toggle | p: Close panels | q: Quit")
            } else {
                Paragraph::new(
                    "↑/↓: Navigate | 1-9: Sort column | /: Filter | c: Clear filters | p: Panels | q: Quit",
                )
            }
            .block(Block::default().borders(Borders::ALL).title("Controls"));
            f.render_widget(instructions, chunks[2]);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.filter_mode {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter => {
                        app.filter_mode = false;
                        debug!("Exited filter mode");
                    }
                    KeyCode::Backspace => {
                        app.filter.pop();
                        app.refilter();
                    }
                    KeyCode::Char(c) => {
                        app.filter.push(c);
                        app.refilter();
                    }
                    _ => {}
                }
            } else {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        info!("TUI quit requested");
                        break;
                    }
                    KeyCode::Char('/') => {
                        app.filter_mode = true;
                        debug!("Entered filter mode");
                    }
                    KeyCode::Char('c') => app.trigger_clear_all_filters(),
                    KeyCode::Char('p') => app.show_panels = !app.show_panels,
                    KeyCode::Char(' ') if app.show_panels => app.toggle_panel(),
                    KeyCode::Char(c @ '1'..='9') => {
                        app.sort_by_column(c as usize - '1' as usize);
                    }
                    KeyCode::Down if app.show_panels => app.next_panel(),
                    KeyCode::Up if app.show_panels => app.previous_panel(),
                    KeyCode::Down => app.next_row(),
                    KeyCode::Up => app.previous_row(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    Ok(())
}
