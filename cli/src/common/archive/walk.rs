//! # PackRS Directory Traversal (`common::archive::walk`)
//!
//! File: cli/src/common/archive/walk.rs
//!
//! ## Overview
//!
//! This module turns a directory tree into archive entries. It is shared by
//! every archive format: it only decides *which* entries exist, *what* they are
//! called inside the archive and *in which order* they are written. Writing an
//! entry is delegated to an [`EntrySink`].
//!
//! ## Architecture
//!
//! - **`compute_archive_path`**: Maps a directory on disk to the prefix its contents
//!   receive inside the archive. Called once per directory level, never per file.
//! - **`add_tree`**: The top-level entry point. Emits the synthetic root marker in
//!   include-root mode, then starts the recursive walk with the root fixed.
//! - **`add_level`** (private): Scans one directory. Every subdirectory gets its
//!   marker and is fully recursed *as it is met*; the level's own files are read
//!   during the scan and written only after the scan is done. A directory's
//!   files therefore always land after all of its subdirectory trees.
//!
//! Paths handled here are text. Directory arguments always end with `/`; the
//! root directory is never changed during the descent, only the current one.
//!
//! Any stat, listing, read or write failure aborts the walk at once. Entries
//! already written stay in the archive.
//!
use super::EntrySink;
use crate::common::fs::SourceFs;
use crate::core::error::{PackrsError, Result};
use std::io;
use tracing::{debug, trace};

/// Separator used for archive-relative paths and directory arguments.
pub const SEPARATOR: char = '/';

/// Returns `dir` with exactly the guarantee the walk needs: a trailing `/`.
pub fn with_trailing_separator(dir: &str) -> String {
    if dir.ends_with(SEPARATOR) {
        dir.to_string()
    } else {
        format!("{dir}{SEPARATOR}")
    }
}

/// # Compute Archive Path (`compute_archive_path`)
///
/// Returns the prefix that entries found directly in `current_dir` get inside
/// the archive.
///
/// The first occurrence of `root_dir` is removed from `current_dir`. This is a
/// substring removal, not a prefix match: `("x/a/", "a/")` yields `"x/"`. During
/// a walk `current_dir` always starts with `root_dir`, so the removed occurrence
/// is the leading one.
///
/// With `include_root`, the last non-empty component of `root_dir` and a `/`
/// are prepended. A root with no named component (such as `"/"`) adds nothing.
///
/// ```rust
/// use packrs::common::archive::walk::compute_archive_path;
///
/// assert_eq!(compute_archive_path("testfolder/1/", "testfolder/", false), "1/");
/// assert_eq!(compute_archive_path("testfolder/1/", "testfolder/", true), "testfolder/1/");
/// assert_eq!(compute_archive_path("testfolder/", "testfolder/", true), "testfolder/");
/// ```
pub fn compute_archive_path(current_dir: &str, root_dir: &str, include_root: bool) -> String {
    let relative = current_dir.replacen(root_dir, "", 1);
    if !include_root {
        return relative;
    }
    match root_dir.split(SEPARATOR).filter(|part| !part.is_empty()).last() {
        Some(root_name) => format!("{root_name}{SEPARATOR}{relative}"),
        None => relative,
    }
}

/// # Add Directory Tree (`add_tree`)
///
/// Writes every directory and file below `dir` into `sink`.
///
/// `dir` may be absolute or relative; a missing trailing `/` is added. The
/// archive paths produced do not depend on which form was used. With
/// `include_root`, a marker for the root directory itself is written first and
/// every other entry is nested under the root's name.
///
/// ## Errors
///
/// An empty `dir` is a `PackrsError::Listing` error. Otherwise propagates the
/// first `PackrsError` raised by `fs` or `sink`. Nothing already written is
/// rolled back.
pub fn add_tree(
    fs: &dyn SourceFs,
    sink: &mut dyn EntrySink,
    dir: &str,
    include_root: bool,
) -> Result<()> {
    // "" must not turn into "/".
    if dir.is_empty() {
        return Err(PackrsError::Listing {
            path: dir.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty directory path"),
        }
        .into());
    }
    let root_dir = with_trailing_separator(dir);
    debug!(
        "Adding tree {} (include root: {})",
        root_dir, include_root
    );
    if include_root {
        let root_marker = compute_archive_path(&root_dir, &root_dir, true);
        // The root name alone; a root without a named component has no marker.
        if !root_marker.is_empty() {
            sink.write_directory_marker(&root_marker)?;
        }
    }
    add_level(fs, sink, &root_dir, &root_dir, include_root)
}

fn add_level(
    fs: &dyn SourceFs,
    sink: &mut dyn EntrySink,
    dir: &str,
    root_dir: &str,
    include_root: bool,
) -> Result<()> {
    let children = fs.list_children(dir)?;
    debug!("Scanning {} ({} entries)", dir, children.len());

    let mut files: Vec<(String, Vec<u8>)> = Vec::new();
    for name in children {
        let child = format!("{dir}{name}");
        if fs.is_dir(&child)? {
            let child_dir = with_trailing_separator(&child);
            let marker = compute_archive_path(&child_dir, root_dir, include_root);
            sink.write_directory_marker(&marker)?;
            add_level(fs, sink, &child_dir, root_dir, include_root)?;
        } else {
            let content = fs.read_file(&child)?;
            files.push((name, content));
        }
    }

    let prefix = compute_archive_path(dir, root_dir, include_root);
    trace!("Archive prefix for {} is {:?}", dir, prefix);
    for (name, content) in files {
        sink.write_file_entry(&format!("{prefix}{name}"), &content)?;
    }
    Ok(())
}
