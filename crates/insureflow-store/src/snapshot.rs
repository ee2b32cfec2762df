use crate::error::{Result, StoreError};
use crate::Store;
use insureflow_core::domain::Lead;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned JSON layout for persisted lead state. The engine itself is
/// memory-only; this is the serialization extension point callers opt into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub leads: Vec<Lead>,
}

impl Snapshot {
    pub fn from_store(store: &Store) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            leads: store.with_leads(|leads| leads.to_vec()),
        }
    }

    /// Rebuilds a store from the snapshot, re-running validation and the
    /// duplicate-id check on every record.
    pub fn restore(self) -> Result<Store> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        let store = Store::new();
        for lead in self.leads {
            store.leads().insert(lead)?;
        }
        Ok(store)
    }

    pub fn read_from(reader: impl Read) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|err| StoreError::Snapshot(err.to_string()))
    }

    pub fn write_to(&self, writer: impl Write) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|err| StoreError::Snapshot(err.to_string()))
    }

    pub fn load_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    pub fn save_path(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
