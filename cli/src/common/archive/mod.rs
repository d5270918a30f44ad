//! # PackRS Archive Writers (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module exposes one archive-writing interface for every supported
//! format. An [`ArchiveWriter`] is created for a destination, receives entries
//! through `add` (raw bytes), `add_file` (one file from disk) and `add_all`
//! (a whole directory tree), and is finalized by `close`.
//!
//! ## Architecture
//!
//! - **`ArchiveFormat`**: The supported formats and their file extensions, including
//!   the destination-name normalization done at creation.
//! - **`EntrySink`**: The only format-specific seam. A sink knows how to write a
//!   directory marker and a file entry, and how to finalize the container.
//! - **`walk`**: The format-agnostic traversal and path normalization used by `add_all`.
//! - **`zip`** / **`tar`**: The two `EntrySink` implementations.
//!
//! The writer owns its sink exclusively. `close` consumes the writer, so an
//! archive cannot be written to after it has been finalized.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
//!
//! # fn run() -> packrs::core::error::Result<()> {
//! let mut writer = ArchiveWriter::create(ArchiveFormat::Zip, "site.tar.gz")?; // becomes site.zip
//! writer.add("README.txt", b"generated")?;
//! writer.add_all("public/", true)?;
//! let path = writer.close()?;
//! println!("wrote {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::{io::LocalFs, SourceFs};
use crate::core::error::{PackrsError, Result};
use anyhow::Context;
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// `EntrySink` writing gzip-compressed tar streams.
pub mod tar;
/// Directory traversal and archive path computation shared by all formats.
pub mod walk;
/// `EntrySink` writing zip archives.
pub mod zip;

/// The archive formats PackRS can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Zip,
    Tar,
}

impl ArchiveFormat {
    /// File extension (with leading dot) of archives in this format.
    pub fn extension(self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ".zip",
            ArchiveFormat::Tar => ".tar.gz",
        }
    }

    fn other(self) -> ArchiveFormat {
        match self {
            ArchiveFormat::Zip => ArchiveFormat::Tar,
            ArchiveFormat::Tar => ArchiveFormat::Zip,
        }
    }

    /// # Normalize Destination Name (`destination_name`)
    ///
    /// Makes `name` end with this format's extension. A name carrying the
    /// other format's extension has that suffix swapped; any other name gets
    /// the extension appended.
    ///
    /// ```rust
    /// use packrs::common::archive::ArchiveFormat;
    ///
    /// assert_eq!(ArchiveFormat::Zip.destination_name("x.tar.gz"), "x.zip");
    /// assert_eq!(ArchiveFormat::Tar.destination_name("x.zip"), "x.tar.gz");
    /// assert_eq!(ArchiveFormat::Tar.destination_name("backup"), "backup.tar.gz");
    /// ```
    pub fn destination_name(self, name: &str) -> String {
        let own = self.extension();
        if name.ends_with(own) {
            return name.to_string();
        }
        match name.strip_suffix(self.other().extension()) {
            Some(stem) => format!("{stem}{own}"),
            None => format!("{name}{own}"),
        }
    }

    /// Wraps an open destination file in this format's sink.
    fn open_sink(self, file: File) -> Box<dyn EntrySink> {
        let out = BufWriter::new(file);
        match self {
            ArchiveFormat::Zip => Box::new(zip::ZipSink::new(out)),
            ArchiveFormat::Tar => Box::new(tar::TarSink::new(out)),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveFormat::Zip => write!(f, "zip"),
            ArchiveFormat::Tar => write!(f, "tar"),
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = PackrsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zip" => Ok(ArchiveFormat::Zip),
            "tar" | "tar.gz" | "tgz" => Ok(ArchiveFormat::Tar),
            _ => Err(PackrsError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// # Entry Sink (`EntrySink`)
///
/// Format-specific writing of single entries. Everything that decides entry
/// names and order lives in [`walk`]; implementors only encode.
///
/// Failures must be reported as `PackrsError::Write` (entries) or
/// `PackrsError::Finalize` (`finish`).
pub trait EntrySink {
    /// Writes an empty directory entry. `path` ends with `/`.
    fn write_directory_marker(&mut self, path: &str) -> Result<()>;

    /// Writes a file entry holding `content`.
    fn write_file_entry(&mut self, path: &str, content: &[u8]) -> Result<()>;

    /// Writes container trailers and flushes the underlying stream.
    fn finish(self: Box<Self>) -> Result<()>;
}

/// An archive being written to a file on disk.
pub struct ArchiveWriter {
    format: ArchiveFormat,
    destination: PathBuf,
    sink: Box<dyn EntrySink>,
}

impl fmt::Debug for ArchiveWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchiveWriter")
            .field("format", &self.format)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl ArchiveWriter {
    /// # Create Archive (`create`)
    ///
    /// Normalizes `name` with [`ArchiveFormat::destination_name`] and creates
    /// (or truncates) the file.
    ///
    /// ## Errors
    ///
    /// `PackrsError::DestinationCreate` when the file cannot be opened for writing.
    pub fn create(format: ArchiveFormat, name: &str) -> Result<Self> {
        let destination = PathBuf::from(format.destination_name(name));
        let file = File::create(&destination).map_err(|source| PackrsError::DestinationCreate {
            path: destination.display().to_string(),
            source,
        })?;
        info!("Creating {} archive {}", format, destination.display());
        Ok(ArchiveWriter {
            format,
            destination,
            sink: format.open_sink(file),
        })
    }

    /// Format this archive is written in.
    pub fn format(&self) -> ArchiveFormat {
        self.format
    }

    /// Path of the archive file, after extension normalization.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Adds `data` as a file entry named exactly `name`.
    pub fn add(&mut self, name: &str, data: &[u8]) -> Result<()> {
        debug!("Adding {} bytes as {}", data.len(), name);
        self.sink.write_file_entry(name, data)
    }

    /// # Add File (`add_file`)
    ///
    /// Reads the file at `path` and stores it under the same path text, with
    /// any leading `/` removed so the entry name is relative.
    ///
    /// ## Errors
    ///
    /// `PackrsError::Read` if the file cannot be read, `PackrsError::Write` if
    /// the entry cannot be written.
    pub fn add_file(&mut self, path: &str) -> Result<()> {
        let content = LocalFs.read_file(path)?;
        let name = path.trim_start_matches(walk::SEPARATOR);
        debug!("Adding file {} as {}", path, name);
        self.sink.write_file_entry(name, &content)
    }

    /// # Add Directory Tree (`add_all`)
    ///
    /// Adds every directory and file below `dir`. See [`walk::add_tree`] for
    /// naming and ordering. With `include_root`, the directory's own name
    /// becomes the top-level entry of the archive.
    pub fn add_all(&mut self, dir: &str, include_root: bool) -> Result<()> {
        self.add_all_from(&LocalFs, dir, include_root)
    }

    /// Same as [`add_all`](Self::add_all), reading through a caller-supplied filesystem.
    pub fn add_all_from(&mut self, fs: &dyn SourceFs, dir: &str, include_root: bool) -> Result<()> {
        walk::add_tree(fs, self.sink.as_mut(), dir, include_root)
    }

    /// # Close Archive (`close`)
    ///
    /// Finalizes the container and flushes the file. Returns the destination path.
    ///
    /// ## Errors
    ///
    /// `PackrsError::Finalize` if trailers cannot be written or the file cannot be flushed.
    pub fn close(self) -> Result<PathBuf> {
        self.sink
            .finish()
            .with_context(|| format!("Failed to close archive {}", self.destination.display()))?;
        info!("Closed archive {}", self.destination.display());
        Ok(self.destination)
    }
}
