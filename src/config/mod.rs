use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::scoring::{AccuracyScorer, ScoringThresholds};

/// Environment variable naming a thresholds file when no explicit override is given.
pub const THRESHOLDS_ENV: &str = "RADIOCHECK_THRESHOLDS";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub thresholds: ScoringThresholds,
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Loads thresholds from `path`, then from `RADIOCHECK_THRESHOLDS`, else uses defaults.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let path = path.or_else(|| std::env::var_os(THRESHOLDS_ENV).map(PathBuf::from));
        match path {
            Some(custom) => Self::load(&custom),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = canonicalize_file(path)?;
        let raw = fs::read_to_string(&source)
            .with_context(|| format!("failed to read thresholds file {:?}", source))?;
        let thresholds: ScoringThresholds = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse thresholds file {:?}", source))?;
        thresholds
            .validate()
            .with_context(|| format!("invalid thresholds in {:?}", source))?;
        info!(path = %source.display(), "loaded scoring thresholds");
        Ok(Self {
            thresholds,
            source: Some(source),
        })
    }

    pub fn scorer(&self) -> AccuracyScorer {
        AccuracyScorer::with_thresholds(self.thresholds)
    }
}

fn canonicalize_file(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve thresholds file at {:?}", path))?;
    if canonical.is_file() {
        Ok(canonical)
    } else {
        Err(anyhow!("thresholds path {:?} is not a file", canonical))
    }
}
