//! Best-score cache, persisted as a small JSON file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// Highest score seen so far and where it lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestScore {
    path: PathBuf,
    best: u32,
}

impl BestScore {
    /// Load from `path`. A missing file is a best score of 0.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: BestScoreFile = serde_json::from_str(&text)
                    .with_context(|| format!("parse best score file {}", path.display()))?;
                file.best_score
            }
            Err(err) if err.kind() == ErrorKind::NotFound => 0,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("read best score file {}", path.display()))
            }
        };
        log::debug!("best score {} from {}", best, path.display());
        Ok(Self { path, best })
    }

    /// Like [`BestScore::load`], but any error is logged and counts as 0.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::load(path.clone()) {
            Ok(best) => best,
            Err(err) => {
                log::warn!("{:#}", err);
                Self { path, best: 0 }
            }
        }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a finished game's score. Returns true and writes the file when
    /// it beats the stored best.
    pub fn submit(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        self.save()?;
        log::info!("new best score {}", score);
        Ok(true)
    }

    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&BestScoreFile {
            best_score: self.best,
        })?;
        fs::write(&self.path, json)
            .with_context(|| format!("write best score file {}", self.path.display()))
    }
}
