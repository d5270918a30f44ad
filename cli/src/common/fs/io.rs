//! # PackRS Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module holds the `std::fs` side of the filesystem collaborator:
//!
//! - **`LocalFs`**: Implements [`SourceFs`] against the real filesystem. Listings are
//!   sorted by file name so archives come out in the same order on every platform.
//! - **`ensure_dir_exists`**: Creates a directory (and parents) when missing, and
//!   rejects a path that exists but is not a directory. Used by the `pack` command
//!   before creating an archive inside a configured output directory.
//!
//! Symbolic links are followed through `fs::metadata`; a link cycle is not detected.
//!
use super::SourceFs;
use crate::core::error::{PackrsError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, trace};

/// `SourceFs` backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl SourceFs for LocalFs {
    fn is_dir(&self, path: &str) -> Result<bool> {
        let metadata = fs::metadata(path).map_err(|source| PackrsError::Stat {
            path: path.to_string(),
            source,
        })?;
        Ok(metadata.is_dir())
    }

    fn list_children(&self, path: &str) -> Result<Vec<String>> {
        let listing_error = |source: io::Error| PackrsError::Listing {
            path: path.to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(listing_error)? {
            let entry = entry.map_err(listing_error)?;
            let name = entry.file_name().into_string().map_err(|raw| {
                listing_error(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("entry name {:?} is not valid UTF-8", raw),
                ))
            })?;
            names.push(name);
        }
        names.sort();
        trace!("Listed {} entries in {}", names.len(), path);
        Ok(names)
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(path).map_err(|source| PackrsError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(data)
    }
}

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist it is created along with any missing parents
/// (like `mkdir -p`). If it exists but is not a directory, a
/// `PackrsError::Config` is returned, since the only caller resolves a
/// configured output directory.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|source| PackrsError::DestinationCreate {
            path: path.display().to_string(),
            source,
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(PackrsError::Config(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}
