//! # PackRS Zip Entry Sink (`common::archive::zip`)
//!
//! File: cli/src/common/archive/zip.rs
//!
//! Zip marks directories by name alone: an entry whose name ends with `/` is a
//! directory to every reader, so markers carry no extra metadata here. File
//! entries are deflate-compressed with the library's default level.
//!
use super::EntrySink;
use crate::core::error::{PackrsError, Result};
use std::io::{self, Seek, Write};
use tracing::trace;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// `EntrySink` over any seekable output stream.
pub struct ZipSink<W: Write + Seek> {
    writer: ZipWriter<W>,
    options: SimpleFileOptions,
}

impl<W: Write + Seek> ZipSink<W> {
    pub fn new(out: W) -> Self {
        ZipSink {
            writer: ZipWriter::new(out),
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        }
    }
}

fn write_error(entry: &str, source: io::Error) -> PackrsError {
    PackrsError::Write {
        entry: entry.to_string(),
        source,
    }
}

impl<W: Write + Seek> EntrySink for ZipSink<W> {
    fn write_directory_marker(&mut self, path: &str) -> Result<()> {
        trace!("zip: directory {}", path);
        self.writer
            .add_directory(path, self.options)
            .map_err(|e| write_error(path, io::Error::other(e)))?;
        Ok(())
    }

    fn write_file_entry(&mut self, path: &str, content: &[u8]) -> Result<()> {
        trace!("zip: file {} ({} bytes)", path, content.len());
        self.writer
            .start_file(path, self.options)
            .map_err(|e| write_error(path, io::Error::other(e)))?;
        self.writer
            .write_all(content)
            .map_err(|e| write_error(path, e))?;
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<()> {
        let finalize_error = |source: io::Error| PackrsError::Finalize {
            stage: "zip central directory".to_string(),
            source,
        };
        let mut writer = self.writer;
        let mut out = writer
            .finish()
            .map_err(|e| finalize_error(io::Error::other(e)))?;
        out.flush().map_err(finalize_error)?;
        Ok(())
    }
}
