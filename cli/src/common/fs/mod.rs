//! # PackRS Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module is the filesystem collaborator of the archive writers. The
//! directory traversal never touches `std::fs` directly; it goes through the
//! [`SourceFs`] trait, which exposes exactly the three capabilities it needs:
//! a stat (`is_dir`), a sorted directory listing (`list_children`) and a
//! whole-file read (`read_file`).
//!
//! ## Architecture
//!
//! - **`SourceFs`**: The capability trait consumed by `common::archive::walk`.
//! - **`io`**: `LocalFs`, the `std::fs` implementation, plus small helpers such as
//!   `ensure_dir_exists` used by the CLI when preparing an output directory.
//!
//! Every method reports failures as the matching `PackrsError` kind (`Stat`,
//! `Listing`, `Read`), so the traversal can propagate them untouched.
//!
//! ## Usage
//!
//! ```rust
//! use packrs::common::fs::{io::LocalFs, SourceFs};
//!
//! # fn run_example() -> packrs::core::error::Result<()> {
//! let fs = LocalFs;
//! if fs.is_dir("assets/")? {
//!     for name in fs.list_children("assets/")? {
//!         println!("{name}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;

/// Contains `LocalFs` and basic file I/O helpers (e.g., `ensure_dir_exists`).
pub mod io;

/// Read-only view of a filesystem, as needed by the directory traversal.
///
/// Paths are plain strings because archive-relative paths are derived from
/// them by text manipulation.
pub trait SourceFs {
    /// Returns whether `path` is a directory. A failed stat is an error, never `false`.
    fn is_dir(&self, path: &str) -> Result<bool>;

    /// Returns the names (not paths) of the immediate children of `path`,
    /// sorted by name.
    fn list_children(&self, path: &str) -> Result<Vec<String>>;

    /// Reads the whole file at `path` into memory.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}
