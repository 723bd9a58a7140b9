use crate::flow::FlowRecord;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use thiserror::Error;
use tracing::{error, info, trace};


#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read flows from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse flow on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads a JSON-lines flow export. Blank lines are skipped; `on_progress`
/// receives the fraction of bytes consumed so far.
pub fn read_flows(
    path: &Path,
    mut on_progress: impl FnMut(f32),
) -> Result<Vec<FlowRecord>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let total = file.metadata().map_err(io_err)?.len().max(1);
    let mut reader = BufReader::new(file);

    let mut flows = Vec::new();
    let mut consumed: u64 = 0;
    let mut line = String::new();
    let mut line_no = 0;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(io_err)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        consumed += read as u64;

        let trimmed = line.trim();
        if !trimmed.is_empty() {
            let flow = FlowRecord::from_json_line(trimmed).map_err(|source| LoadError::Parse {
                line: line_no,
                source,
            })?;
            flows.push(flow);
        }

        on_progress(consumed as f32 / total as f32);
    }

    Ok(flows)
}

pub enum LoadStatus {
    Progress(f32),
    Loaded(Vec<FlowRecord>),
    Error(String),
}

/// Background reader thread reporting over a channel.
pub struct Loader {
    rx: Receiver<LoadStatus>,
}

impl Loader {
    pub fn new(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel();
        info!(path = ?path, "Spawning loader thread");
        thread::spawn(move || {
            let result = read_flows(&path, |progress| {
                trace!(progress, "Loader progress update");
                let _ = tx.send(LoadStatus::Progress(progress));
            });

            match result {
                Ok(flows) => {
                    info!(path = ?path, flows = flows.len(), "Flows loaded; sending results");
                    let _ = tx.send(LoadStatus::Loaded(flows));
                }
                Err(e) => {
                    error!(path = ?path, error = ?e, "Failed to load flows");
                    let _ = tx.send(LoadStatus::Error(e.to_string()));
                }
            }
        });

        Self { rx }
    }

    pub fn try_recv(&self) -> Option<LoadStatus> {
        self.rx.try_recv().ok()
    }
}

pub enum FlowLoadStatus {
    Loading { progress: f32 },
    Ready { flows: Vec<FlowRecord> },
    Error(String),
    Idle,
}

/// Drains a [`Loader`] without blocking and folds its messages into one status.
pub struct FlowLoadController {
    loader: Option<Loader>,
    last_progress: f32,
}

impl FlowLoadController {
    pub fn new(path: PathBuf) -> Self {
        Self {
            loader: Some(Loader::new(path)),
            last_progress: 0.0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn poll(&mut self) -> FlowLoadStatus {
        if self.loader.is_none() {
            return FlowLoadStatus::Idle;
        }

        let mut status = FlowLoadStatus::Loading {
            progress: self.last_progress,
        };

        while let Some(message) = self.loader.as_ref().and_then(|loader| loader.try_recv()) {
            match message {
                LoadStatus::Progress(p) => {
                    self.last_progress = p;
                    status = FlowLoadStatus::Loading { progress: p };
                }
                LoadStatus::Loaded(flows) => {
                    self.loader = None;
                    info!(flows = flows.len(), "Loader completed successfully");
                    return FlowLoadStatus::Ready { flows };
                }
                LoadStatus::Error(error) => {
                    self.loader = None;
                    error!(error = %error, "Loader encountered an error");
                    return FlowLoadStatus::Error(error);
                }
            }
        }

        status
    }
}
