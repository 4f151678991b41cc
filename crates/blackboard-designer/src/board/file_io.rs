//! File I/O operations (save, load) for the board.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use blackboard_core::PersistenceError;

use super::Board;
use crate::figure::Figure;
use crate::serialization::{self, DesignFile, FileFormat};

impl Board {
    /// Saves every figure in draw order. Returns the number written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        match FileFormat::from_path(path) {
            FileFormat::Json => {
                let design = DesignFile::new(self.figures.clone());
                std::fs::write(path, design.to_json()?)?;
            }
            FileFormat::Text => {
                let writer = BufWriter::new(File::create(path)?);
                serialization::write_text(writer, &self.figures)?;
            }
        }
        tracing::info!("Saved {} figures to {}", self.figures.len(), path.display());
        Ok(self.figures.len())
    }

    /// Replaces the board contents with a saved design.
    ///
    /// Any failure (unreadable file, malformed record, or a figure the board
    /// rejects) leaves the board empty rather than partially loaded.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistenceError> {
        let path = path.as_ref();
        let result = Self::read_design(path).and_then(|figures| self.replace_figures(figures));
        match result {
            Ok(count) => {
                tracing::info!("Loaded {} figures from {}", count, path.display());
                Ok(count)
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", path.display(), e);
                self.clear_all();
                Err(e)
            }
        }
    }

    /// Figures paired with the line (or JSON record index) they came from.
    fn read_design(path: &Path) -> Result<Vec<(usize, Figure)>, PersistenceError> {
        match FileFormat::from_path(path) {
            FileFormat::Json => {
                let content = std::fs::read_to_string(path)?;
                let design = DesignFile::from_json(&content)?;
                Ok(design
                    .figures
                    .into_iter()
                    .enumerate()
                    .map(|(idx, figure)| (idx + 1, figure))
                    .collect())
            }
            FileFormat::Text => serialization::read_text(BufReader::new(File::open(path)?)),
        }
    }

    fn replace_figures(&mut self, figures: Vec<(usize, Figure)>) -> Result<usize, PersistenceError> {
        self.clear_all();
        let count = figures.len();
        for (line, figure) in figures {
            self.add_figure(figure)
                .map_err(|source| PersistenceError::Rejected { line, source })?;
        }
        Ok(count)
    }
}
