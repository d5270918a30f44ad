//! # PackRS Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error kinds raised while building archives, along
//! with the crate-wide `Result` alias.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PackrsError`: A custom error enum using `thiserror`, one variant per failure kind
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Archive operations always raise a `PackrsError` as the root cause, so a caller
//! can decide on a retry or skip policy by inspecting the kind:
//!
//! ```rust,ignore
//! match writer.add_all("assets/", false) {
//!     Ok(()) => {}
//!     Err(e) if matches!(e.downcast_ref::<PackrsError>(), Some(PackrsError::Read { .. })) => {
//!         // A file vanished mid-walk; the archive is partial and should be discarded.
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! No error is ever turned into a process exit inside the library; only the
//! binary's `main` decides that.
//!
use std::io;
use thiserror::Error;

/// Custom error type for PackRS. Each variant is one failure kind.
#[derive(Error, Debug)]
pub enum PackrsError {
    #[error("Cannot create archive '{path}': {source}")]
    DestinationCreate {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot list directory '{path}': {source}")]
    Listing {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot stat '{path}': {source}")]
    Stat {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write archive entry '{entry}': {source}")]
    Write {
        entry: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to finalize {stage}: {source}")]
    Finalize {
        stage: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported archive format '{0}'. Expected 'zip' or 'tar'.")]
    UnsupportedFormat(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
