use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use shared::domain::{AuthState, Reservation};

pub const AUTH_KEY: &str = "auth";
pub const RESERVATIONS_KEY: &str = "reservations";

/// Durable key-value store of JSON documents, one file per key under a root
/// directory. Reads degrade to defaults so a corrupt document can never take
/// the storefront down.
#[derive(Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .with_context(|| format!("failed to create store directory '{}'", root.display()))?;
        Ok(Self { root })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read store entry '{key}'")),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)
            .with_context(|| format!("failed to write store entry '{key}'"))
    }

    /// Removing a missing entry is not an error.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("failed to remove store entry '{key}'")),
        }
    }

    pub fn load_auth(&self) -> AuthState {
        self.load_or_default(AUTH_KEY)
    }

    pub fn save_auth(&self, auth: &AuthState) -> Result<()> {
        self.save(AUTH_KEY, auth)
    }

    pub fn clear_auth(&self) -> Result<()> {
        self.remove_item(AUTH_KEY)
    }

    pub fn load_reservations(&self) -> Vec<Reservation> {
        self.load_or_default(RESERVATIONS_KEY)
    }

    pub fn save_reservations(&self, reservations: &[Reservation]) -> Result<()> {
        self.save(RESERVATIONS_KEY, &reservations)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return T::default(),
            Err(err) => {
                warn!(key, error = %err, "failed to read persisted state, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "persisted state is malformed, using defaults");
                T::default()
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("failed to encode store entry '{key}'"))?;
        self.set_item(key, &raw)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
