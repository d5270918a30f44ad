//! # PackRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!

//! ## Overview
//!
//! This module is the root of the reusable parts of PackRS, kept apart from the
//! command handlers (`commands::`) and core infrastructure (`core::`).
//!
//! - **`archive`**: Archive writers for zip and tar.gz, sharing one directory traversal.
//! - **`fs`**: The filesystem collaborator the traversal reads through, and I/O helpers.
//!
//! ```rust,no_run
//! use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
//! use packrs::common::fs::io::ensure_dir_exists;
//! use std::path::Path;
//!
//! # fn run_example() -> packrs::core::error::Result<()> {
//! ensure_dir_exists(Path::new("dist"))?;
//! let mut writer = ArchiveWriter::create(ArchiveFormat::Tar, "dist/site")?;
//! writer.add_all("site/", false)?;
//! writer.close()?;
//! # Ok(())
//! # }
//! ```
//!

/// Archive writers (zip, tar.gz) and the shared directory traversal.
pub mod archive;
/// Filesystem access used by the traversal (listing, stat, reading).
pub mod fs;
