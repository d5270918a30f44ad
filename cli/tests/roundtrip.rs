//! # PackRS Library Round-Trip Tests
//!
//! File: cli/tests/roundtrip.rs
//!
//! ## Overview
//!
//! Writes the sample tree with both archive formats through the library API,
//! then reads the archives back and compares entry names and order.
//!

mod common;
use common::*;

use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
use packrs::core::error::PackrsError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn pack_tree(format: ArchiveFormat, out: &Path, dir: &str, include_root: bool) -> Vec<String> {
    let mut writer = ArchiveWriter::create(format, out.to_str().unwrap()).unwrap();
    writer.add_all(dir, include_root).unwrap();
    let path = writer.close().unwrap();
    archive_entries(&path)
}

#[test]
fn test_zip_absolute_without_root() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let dir = format!("{}/", root.display());
    let entries = pack_tree(ArchiveFormat::Zip, &temp.path().join("out"), &dir, false);
    assert_eq!(entries, WITHOUT_ROOT);
}

#[test]
fn test_tar_absolute_with_root() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let dir = format!("{}/", root.display());
    let entries = pack_tree(ArchiveFormat::Tar, &temp.path().join("out"), &dir, true);
    assert_eq!(entries, WITH_ROOT);
}

#[test]
fn test_both_formats_both_modes_agree() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let dir = format!("{}/", root.display());
    for (i, format) in [ArchiveFormat::Zip, ArchiveFormat::Tar].into_iter().enumerate() {
        let without = pack_tree(format, &temp.path().join(format!("a{i}")), &dir, false);
        assert_eq!(without, WITHOUT_ROOT, "{format} without root");
        let with = pack_tree(format, &temp.path().join(format!("b{i}")), &dir, true);
        assert_eq!(with, WITH_ROOT, "{format} with root");
    }
}

#[test]
fn test_directory_without_trailing_separator() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let entries = pack_tree(
        ArchiveFormat::Zip,
        &temp.path().join("out"),
        root.to_str().unwrap(),
        true,
    );
    assert_eq!(entries, WITH_ROOT);
}

#[test]
fn test_nested_subtrees_before_level_files() {
    let temp = tempdir().unwrap();
    let root = temp.path().join("proj");
    fs::create_dir_all(root.join("src/bin")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("Cargo.toml"), "[package]").unwrap();
    fs::write(root.join("src/lib.rs"), "").unwrap();
    fs::write(root.join("src/bin/main.rs"), "fn main() {}").unwrap();
    fs::write(root.join("docs/guide.md"), "# Guide").unwrap();

    let dir = format!("{}/", root.display());
    let entries = pack_tree(ArchiveFormat::Tar, &temp.path().join("out"), &dir, false);
    assert_eq!(
        entries,
        vec![
            "docs/",
            "docs/guide.md",
            "src/",
            "src/bin/",
            "src/bin/main.rs",
            "src/lib.rs",
            "Cargo.toml",
        ]
    );
}

#[test]
fn test_mixed_add_calls_and_content() {
    let temp = tempdir().unwrap();
    let root = make_testfolder(temp.path());
    let single = temp.path().join("notes.txt");
    fs::write(&single, "loose file").unwrap();

    let mut writer =
        ArchiveWriter::create(ArchiveFormat::Zip, temp.path().join("mixed").to_str().unwrap())
            .unwrap();
    writer.add("generated/info.txt", b"from memory").unwrap();
    writer.add_file(single.to_str().unwrap()).unwrap();
    writer.add_all(root.to_str().unwrap(), false).unwrap();
    let path = writer.close().unwrap();

    let single_name = single.to_str().unwrap().trim_start_matches('/').to_string();
    let entries = zip_entries(&path);
    assert_eq!(entries[0], "generated/info.txt");
    assert_eq!(entries[1], single_name);
    assert_eq!(&entries[2..], WITHOUT_ROOT);

    assert_eq!(zip_entry_content(&path, "generated/info.txt"), "from memory");
    assert_eq!(zip_entry_content(&path, &single_name), "loose file");
    assert_eq!(zip_entry_content(&path, "1/bla.txt"), "bla");
}

#[test]
fn test_duplicate_names_are_not_rejected() {
    let temp = tempdir().unwrap();
    let mut writer =
        ArchiveWriter::create(ArchiveFormat::Tar, temp.path().join("dup").to_str().unwrap())
            .unwrap();
    writer.add("same.txt", b"one").unwrap();
    writer.add("same.txt", b"two").unwrap();
    let path = writer.close().unwrap();
    assert_eq!(tar_entries(&path), vec!["same.txt", "same.txt"]);
}

#[test]
fn test_missing_directory_keeps_archive_usable() {
    let temp = tempdir().unwrap();
    let mut writer =
        ArchiveWriter::create(ArchiveFormat::Zip, temp.path().join("partial").to_str().unwrap())
            .unwrap();
    writer.add("before.txt", b"kept").unwrap();
    let missing = temp.path().join("does-not-exist");
    let err = writer.add_all(missing.to_str().unwrap(), false).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackrsError>(),
        Some(PackrsError::Listing { .. })
    ));
    // Not transactional: what was written before the failure stays.
    let path = writer.close().unwrap();
    assert_eq!(zip_entries(&path), vec!["before.txt"]);
}

#[test]
fn test_add_file_missing_is_read_error() {
    let temp = tempdir().unwrap();
    let mut writer =
        ArchiveWriter::create(ArchiveFormat::Tar, temp.path().join("x").to_str().unwrap())
            .unwrap();
    let err = writer
        .add_file(temp.path().join("nope.txt").to_str().unwrap())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PackrsError>(),
        Some(PackrsError::Read { .. })
    ));
}
