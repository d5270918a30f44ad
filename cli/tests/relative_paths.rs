//! # PackRS Relative Path Tests
//!
//! File: cli/tests/relative_paths.rs
//!
//! ## Overview
//!
//! Packs the sample tree by a path relative to the working directory. This
//! test changes the process working directory, so it lives alone in its own
//! test crate.
//!

mod common;
use common::*;

use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
use std::env;
use tempfile::tempdir;

#[test]
fn test_relative_and_absolute_roots_agree() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let previous = env::current_dir().unwrap();
    env::set_current_dir(temp.path()).unwrap();

    let mut results = Vec::new();
    for format in [ArchiveFormat::Zip, ArchiveFormat::Tar] {
        for include_root in [false, true] {
            let mut relative = ArchiveWriter::create(format, "relative").unwrap();
            relative.add_all("testfolder/", include_root).unwrap();
            let relative = archive_entries(&relative.close().unwrap());

            let mut absolute = ArchiveWriter::create(format, "absolute").unwrap();
            absolute
                .add_all(&format!("{}/", root.display()), include_root)
                .unwrap();
            let absolute = archive_entries(&absolute.close().unwrap());

            results.push((format, include_root, relative, absolute));
        }
    }
    env::set_current_dir(previous).unwrap();

    for (format, include_root, relative, absolute) in results {
        assert_eq!(relative, absolute, "{format} include_root={include_root}");
        if include_root {
            assert_eq!(relative, WITH_ROOT);
        } else {
            assert_eq!(relative, WITHOUT_ROOT);
        }
    }
}
