//! Save/Load functionality for engine snapshots.
//!
//! Uses bincode for compact binary serialization of the whole state. Saves
//! are versioned; a profile-keyed directory store covers the external
//! persistence contract (load / save / clear). Writing the same snapshot
//! twice is harmless and last-write-wins.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::GameState;

/// Version number for the save format (increment when the shape changes).
const SAVE_VERSION: u32 = 1;

/// Serializable snapshot wrapper carrying its format version.
#[derive(Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub state: GameState,
}

/// Errors that can occur during save/load.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Encode(#[from] Box<bincode::ErrorKind>),

    #[error("Save version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },
}

/// Save a complete snapshot to a writer.
pub fn save_snapshot<W: Write>(writer: W, state: &GameState) -> Result<(), SnapshotError> {
    let data = SaveData { version: SAVE_VERSION, state: state.clone() };
    bincode::serialize_into(writer, &data)?;
    Ok(())
}

/// Load a snapshot from a reader, rejecting mismatched versions.
pub fn load_snapshot<R: Read>(reader: R) -> Result<GameState, SnapshotError> {
    let data: SaveData = bincode::deserialize_from(reader)?;
    if data.version != SAVE_VERSION {
        return Err(SnapshotError::VersionMismatch { expected: SAVE_VERSION, found: data.version });
    }
    Ok(data.state)
}

/// Directory-backed store of one snapshot per profile id.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, profile_id: &str) -> PathBuf {
        self.dir.join(format!("{profile_id}.save"))
    }

    /// Load the snapshot for a profile, or `None` when nothing is saved.
    pub fn load(&self, profile_id: &str) -> Result<Option<GameState>, SnapshotError> {
        let path = self.path_for(profile_id);
        if !path.exists() {
            return Ok(None);
        }
        let file = File::open(path)?;
        Ok(Some(load_snapshot(BufReader::new(file))?))
    }

    /// Write a snapshot under the profile id it carries.
    pub fn save(&self, state: &GameState) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir)?;
        let file = File::create(self.path_for(&state.profile_id))?;
        save_snapshot(BufWriter::new(file), state)
    }

    /// Remove a profile's snapshot if present.
    pub fn clear(&self, profile_id: &str) -> Result<(), SnapshotError> {
        let path = self.path_for(profile_id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
