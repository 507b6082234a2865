use crate::error::{CliError, Result};
use chrono::{DateTime, Local};
use std::{
    env,
    path::{Path, PathBuf},
};

const ENV_OUTPUT_DIR: &str = "FOREST_CALC_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "exports";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// What a CSV export contains; decides the file name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Beautiful days from `search`
    Matches,
    /// Ranked grid cells from `optimize`
    Candidates,
}

impl ExportKind {
    pub fn file_prefix(self) -> &'static str {
        match self {
            ExportKind::Matches => "patterns",
            ExportKind::Candidates => "optimize",
        }
    }
}

/// Where exports go: `--export DIR`, else `FOREST_CALC_OUTPUT_DIR`, else `exports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Settings {
    pub fn resolve(cli_dir: Option<&Path>) -> Result<Self> {
        let output_dir = match cli_dir {
            Some(dir) => dir.to_path_buf(),
            None => match env::var(ENV_OUTPUT_DIR) {
                Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
                _ => return Ok(Self::default()),
            },
        };

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(CliError::InvalidConfiguration(format!(
                "Output path is not a directory: {}",
                output_dir.display()
            )));
        }
        Ok(Self { output_dir })
    }

    /// `<output_dir>/<prefix>_<timestamp>.csv`
    pub fn export_path(&self, kind: ExportKind, at: DateTime<Local>) -> PathBuf {
        let stamp = at.format(TIMESTAMP_FORMAT);
        self.output_dir.join(format!("{}_{}.csv", kind.file_prefix(), stamp))
    }
}
