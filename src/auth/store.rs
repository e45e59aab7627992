// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer credential storage with restart durability.

use crate::error::{AppError, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Holds the current bearer credential.
///
/// The value is always replaced wholesale, so a reader never observes a
/// half-written token: in memory the whole `Option` is swapped, and on
/// disk writes go through a sibling temp file and a rename.
pub struct CredentialStore {
    path: Option<PathBuf>,
    token: RwLock<Option<String>>,
}

impl CredentialStore {
    /// Store backed by the per-user data directory.
    pub fn persistent() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "internmatch")
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("no home directory available")))?;
        Ok(Self::at_path(dirs.data_dir().join("credential")))
    }

    /// Store backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());
        Self {
            path: Some(path),
            token: RwLock::new(token),
        }
    }

    /// Store with no disk backing (tests, ephemeral sessions).
    pub fn in_memory() -> Self {
        Self {
            path: None,
            token: RwLock::new(None),
        }
    }

    /// Replace the stored credential.
    pub fn set(&self, token: &str) -> Result<()> {
        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Internal(anyhow::anyhow!("creating credential directory: {e}"))
                })?;
            }
            let tmp = path.with_extension("tmp");
            fs::write(&tmp, token)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("writing credential: {e}")))?;
            fs::rename(&tmp, path)
                .map_err(|e| AppError::Internal(anyhow::anyhow!("persisting credential: {e}")))?;
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    /// Current credential, if any.
    pub fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove the credential from memory and disk.
    pub fn clear(&self) -> Result<()> {
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(AppError::Internal(anyhow::anyhow!(
                        "removing credential file: {e}"
                    )))
                }
            }
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}
