pub mod cli;
pub mod features;
pub mod flow;
pub mod i18n;
pub mod loader;
pub mod logging;
pub mod overview;
pub mod report;
pub mod table;
pub mod tui;
