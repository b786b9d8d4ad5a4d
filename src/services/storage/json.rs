use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{BoardDocument, OrderStore};
use crate::models::work_center::WorkCenter;
use crate::models::work_order::WorkOrder;

/// Board persisted as a single pretty-printed JSON file.
///
/// A missing file starts from the sample board; nothing is written until the
/// first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    document: BoardDocument,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = Self::read_document(&path)?;
        log::info!(
            "Opened board at {}: {} work centers, {} work orders",
            path.display(),
            document.work_centers.len(),
            document.work_orders.len()
        );
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(path: &Path) -> Result<BoardDocument> {
        if !path.exists() {
            log::info!("No board at {}, starting from sample data", path.display());
            return Ok(BoardDocument::seeded());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("board file {} is not a valid board", path.display()))
    }

    fn write_document(&self, document: &BoardDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = serde_json::to_string_pretty(document).context("failed to encode board")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write board to {}", self.path.display()))
    }
}

impl OrderStore for JsonFileStore {
    fn load_work_centers(&self) -> Result<Vec<WorkCenter>> {
        Ok(self.document.work_centers.clone())
    }

    fn load_work_orders(&self) -> Result<Vec<WorkOrder>> {
        Ok(self.document.work_orders.clone())
    }

    fn save_work_orders(&mut self, orders: &[WorkOrder]) -> Result<()> {
        let document = BoardDocument {
            work_centers: self.document.work_centers.clone(),
            work_orders: orders.to_vec(),
        };
        self.write_document(&document)?;
        self.document = document;
        log::info!("Saved {} work orders to {}", orders.len(), self.path.display());
        Ok(())
    }
}
