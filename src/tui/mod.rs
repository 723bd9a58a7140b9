use crate::overview::Panel;
use crate::table::SortState;
use std::path::PathBuf;

#[cfg(feature = "tui")]
pub mod widgets;

#[cfg(feature = "tui")]
pub mod theme;

#[cfg(feature = "tui")]
mod app;

#[cfg(feature = "tui")]
pub use app::run_tui;

/// Startup settings for the terminal UI.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    pub path: PathBuf,
    pub panels: Vec<Panel>,
    pub sort: SortState,
    pub filter: String,
    pub limit: Option<String>,
    pub metric: String,
}

#[cfg(feature = "tui")]
pub fn to_color(hex: u32) -> ratatui::style::Color {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    ratatui::style::Color::Rgb(r, g, b)
}

#[cfg(not(feature = "tui"))]
pub fn run_tui(_config: TuiConfig) -> anyhow::Result<()> {
    println!("TUI feature is disabled. Rebuild with --features tui to enable the Ratatui TUI.");
    Ok(())
}
