//! # PackRS TAR Entry Sink (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module writes gzipped tarballs (`.tar.gz`) one entry at a time. Unlike
//! zip, tar cannot tell a directory from a file by name: every entry needs an
//! explicit header record.
//!
//! - File entries get a regular-file header whose size is the content length.
//! - Directory markers get a directory type flag and size zero.
//!
//! ## Architecture
//!
//! The `tar` crate builds the header records and the archive structure; the
//! `flate2` crate compresses the stream. `finish` writes the tar end-of-archive
//! blocks, then the gzip trailer, then flushes the output.
//!
//! ```rust
//! use packrs::common::archive::{tar::TarSink, EntrySink};
//!
//! # fn main() -> packrs::core::error::Result<()> {
//! let mut tar_gz_bytes: Vec<u8> = Vec::new();
//! let mut sink = Box::new(TarSink::new(&mut tar_gz_bytes));
//! sink.write_directory_marker("docs/")?;
//! sink.write_file_entry("docs/readme.txt", b"content")?;
//! sink.finish()?;
//! assert!(!tar_gz_bytes.is_empty());
//! # Ok(())
//! # }
//! ```
//!
use super::EntrySink;
use crate::core::error::{PackrsError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};
use tar::{Builder, EntryType, Header};
use tracing::trace;

const FILE_MODE: u32 = 0o644;
const DIR_MODE: u32 = 0o755;

/// `EntrySink` producing a gzip-compressed tar stream.
pub struct TarSink<W: Write> {
    builder: Builder<GzEncoder<W>>,
}

impl<W: Write> TarSink<W> {
    pub fn new(out: W) -> Self {
        let encoder = GzEncoder::new(out, Compression::default());
        TarSink {
            builder: Builder::new(encoder),
        }
    }
}

/// Header for one entry; the path and checksum are filled by `append_data`.
fn entry_header(entry_type: EntryType, size: u64, mode: u32) -> Header {
    let mut header = Header::new_gnu();
    header.set_entry_type(entry_type);
    header.set_size(size);
    header.set_mode(mode);
    let mtime = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    header.set_mtime(mtime);
    header
}

impl<W: Write> EntrySink for TarSink<W> {
    fn write_directory_marker(&mut self, path: &str) -> Result<()> {
        trace!("tar: directory {}", path);
        let mut header = entry_header(EntryType::Directory, 0, DIR_MODE);
        self.builder
            .append_data(&mut header, path, io::empty())
            .map_err(|source| PackrsError::Write {
                entry: path.to_string(),
                source,
            })?;
        Ok(())
    }

    fn write_file_entry(&mut self, path: &str, content: &[u8]) -> Result<()> {
        trace!("tar: file {} ({} bytes)", path, content.len());
        let mut header = entry_header(EntryType::Regular, content.len() as u64, FILE_MODE);
        self.builder
            .append_data(&mut header, path, content)
            .map_err(|source| PackrsError::Write {
                entry: path.to_string(),
                source,
            })?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        // Finalize the tar structure (end-of-archive blocks), then the gzip stream.
        let encoder = self
            .builder
            .into_inner()
            .map_err(|source| PackrsError::Finalize {
                stage: "tar end-of-archive blocks".to_string(),
                source,
            })?;
        let mut out = encoder.finish().map_err(|source| PackrsError::Finalize {
            stage: "gzip stream".to_string(),
            source,
        })?;
        out.flush().map_err(|source| PackrsError::Finalize {
            stage: "archive file".to_string(),
            source,
        })?;
        Ok(())
    }
}
