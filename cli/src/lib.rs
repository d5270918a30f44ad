//! # PackRS Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! PackRS builds zip and gzipped tar archives from in-memory bytes, single
//! files, or whole directory trees, through one writer interface whatever the
//! format. The `packrs` binary is a thin command-line layer over this library.
//!
//! ```rust,no_run
//! use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
//!
//! # fn main() -> packrs::core::error::Result<()> {
//! for format in [ArchiveFormat::Zip, ArchiveFormat::Tar] {
//!     let mut writer = ArchiveWriter::create(format, "testfolder")?;
//!     writer.add_all("testfolder/", true)?;
//!     writer.close()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
pub mod common; // Archive writers and filesystem access.
pub mod core; // Errors and configuration.
