//! Best-score persistence.
//!
//! A single integer in a small JSON file. Absent or malformed files are
//! treated as "no best score yet" (0) and never propagated as errors; only
//! writes can fail.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const SCORE_FILE_NAME: &str = ".retris_score.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// File-backed store for the best score across sessions.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: the home directory, falling back to the current
    /// directory when HOME is unset.
    pub fn default_path() -> PathBuf {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(SCORE_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored best score. Missing or malformed files yield 0.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<ScoreFile>(&text).ok())
            .map(|file| file.best_score)
            .unwrap_or(0)
    }

    /// Persist a new best score.
    pub fn save(&self, best_score: u32) -> Result<()> {
        let text = serde_json::to_string(&ScoreFile { best_score })?;
        fs::write(&self.path, text)
            .with_context(|| format!("writing best score to {}", self.path.display()))?;
        Ok(())
    }
}
