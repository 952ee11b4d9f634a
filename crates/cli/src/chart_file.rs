//! Chart target that writes a Chart.js line configuration to disk.

use rendafixa_report::ChartError;
use rendafixa_report::chart::ChartData;
use rendafixa_report::chart::slot::ChartTarget;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Writes the chart to a fixed path. Releasing the chart deletes the file.
#[derive(Debug, Clone)]
pub struct JsonFileTarget {
    path: PathBuf,
}

impl JsonFileTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle to a chart left at the path by an earlier run, if any.
    #[must_use]
    pub fn stale_handle(&self) -> Option<PathBuf> {
        self.path.is_file().then(|| self.path.clone())
    }
}

impl ChartTarget for JsonFileTarget {
    type Handle = PathBuf;

    fn render(&mut self, chart: &ChartData) -> Result<PathBuf, ChartError> {
        let body = serde_json::to_string_pretty(&chart.to_line_config())?;
        fs::write(&self.path, body)?;
        info!(path = %self.path.display(), series = chart.datasets.len(), "Chart written");
        Ok(self.path.clone())
    }

    fn release(&mut self, handle: PathBuf) {
        match fs::remove_file(&handle) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %handle.display(), error = %e, "Failed to remove chart file"),
        }
    }
}
