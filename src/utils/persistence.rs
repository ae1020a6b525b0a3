//! Whole-state JSON persistence.
//!
//! The player state is written in one piece after every successful command.
//! `JsonFileStore` keeps it under `~/.summoner/`; `MemoryStore` keeps the
//! serialized text in memory for tests and embedding.

use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME, SAVE_VERSION};
use crate::core::error::GameError;
use crate::core::game_state::PlayerState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize)]
struct SaveData {
    version: u32,
    player: PlayerState,
}

/// Where a session loads and saves the player state.
pub trait StateStore {
    /// Returns `None` when nothing has been saved yet.
    fn load(&mut self) -> Result<Option<PlayerState>, GameError>;
    fn save(&mut self, state: &PlayerState) -> Result<(), GameError>;
}

/// Get the ~/.summoner/ directory path, creating it if needed.
pub fn summoner_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(SAVE_DIR_NAME);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn encode(state: &PlayerState) -> Result<String, GameError> {
    let data = SaveData {
        version: SAVE_VERSION,
        player: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

fn decode(json: &str) -> Result<PlayerState, GameError> {
    let data: SaveData = serde_json::from_str(json)?;
    if data.version != SAVE_VERSION {
        log::warn!(
            "save version {} differs from {}, loading anyway",
            data.version,
            SAVE_VERSION
        );
    }
    Ok(data.player)
}

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store at ~/.summoner/player.json.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: summoner_dir()?.join(SAVE_FILE_NAME),
        })
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<PlayerState>, GameError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let state = decode(&json)?;
        log::debug!("loaded save from {}", self.path.display());
        Ok(Some(state))
    }

    fn save(&mut self, state: &PlayerState) -> Result<(), GameError> {
        let json = encode(state)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Keeps the last save as JSON text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
    save_count: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save_count(&self) -> u32 {
        self.save_count
    }

    pub fn raw(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl StateStore for MemoryStore {
    fn load(&mut self) -> Result<Option<PlayerState>, GameError> {
        self.saved.as_deref().map(decode).transpose()
    }

    fn save(&mut self, state: &PlayerState) -> Result<(), GameError> {
        self.saved = Some(encode(state)?);
        self.save_count += 1;
        Ok(())
    }
}
