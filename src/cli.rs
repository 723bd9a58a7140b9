use crate::features::{EnabledFeatures, Feature};
use crate::logging::{DEFAULT_LOG_FILE, LogTarget};
use crate::table::{SortDirection, SortState};
use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "flowscope", version, about = "Sortable network flow table and overview panel catalogue")]
pub struct Args {
    /// JSON-lines file with one flow record per line
    pub flows: Option<PathBuf>,

    /// Open the terminal UI (requires the `tui` cargo feature)
    #[arg(long)]
    pub tui: bool,

    /// Enabled capabilities, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub features: Vec<Feature>,

    /// Initial sort column index
    #[arg(long)]
    pub sort: Option<usize>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Initial text filter
    #[arg(long, default_value = "")]
    pub filter: String,

    /// Print the overview panel catalogue
    #[arg(long)]
    pub panels: bool,

    /// Top-N label shown in panel titles, e.g. `5` or `10+`
    #[arg(long)]
    pub limit: Option<String>,

    /// Metric label shown in panel titles
    #[arg(long, default_value = "bytes")]
    pub metric: String,

    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    #[arg(long, default_value_t = LevelFilter::INFO)]
    pub log_level: LevelFilter,

    /// Log to stdout instead of the log file
    #[arg(long, conflicts_with = "tui")]
    pub log_stdout: bool,
}

impl Args {
    pub fn feature_gate(&self) -> EnabledFeatures {
        self.features.iter().copied().collect()
    }

    pub fn sort_state(&self) -> SortState {
        match self.sort {
            Some(index) if self.desc => SortState::by(index, SortDirection::Desc),
            Some(index) => SortState::by(index, SortDirection::Asc),
            None => SortState::unsorted(),
        }
    }

    pub fn log_target(&self) -> LogTarget {
        if self.log_stdout {
            LogTarget::Stdout
        } else {
            LogTarget::File(self.log_file.clone())
        }
    }
}
