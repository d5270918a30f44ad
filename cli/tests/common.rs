//! # PackRS Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates: locating the `packrs`
//! binary, building the sample `testfolder` tree, and listing the entries of a
//! produced archive in stored order.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Returns an `assert_cmd::Command` for the compiled `packrs` binary.
pub fn packrs_cmd() -> Command {
    Command::cargo_bin("packrs").expect("Failed to find packrs binary for testing")
}

/// Builds `testfolder/{test1.txt, test2.txt, 1/bla.txt}` under `parent`.
pub fn make_testfolder(parent: &Path) -> PathBuf {
    let root = parent.join("testfolder");
    fs::create_dir_all(root.join("1")).unwrap();
    fs::write(root.join("test1.txt"), "test 1").unwrap();
    fs::write(root.join("test2.txt"), "test 2").unwrap();
    fs::write(root.join("1/bla.txt"), "bla").unwrap();
    root
}

/// Entry names of a zip archive in central-directory order.
pub fn zip_entries(path: &Path) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Entry names of a gzipped tar archive in stored order. Directory entries
/// are reported with a trailing `/`, as `tar -tf` prints them.
pub fn tar_entries(path: &Path) -> Vec<String> {
    let mut archive = tar::Archive::new(GzDecoder::new(File::open(path).unwrap()));
    archive
        .entries()
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            let mut name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();
            if entry.header().entry_type().is_dir() && !name.ends_with('/') {
                name.push('/');
            }
            name
        })
        .collect()
}

/// Lists entries with the reader matching the file extension.
pub fn archive_entries(path: &Path) -> Vec<String> {
    if path.to_string_lossy().ends_with(".zip") {
        zip_entries(path)
    } else {
        tar_entries(path)
    }
}

/// Content of one entry of a zip archive.
pub fn zip_entry_content(path: &Path, name: &str) -> String {
    use std::io::Read;
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

pub const WITHOUT_ROOT: [&str; 4] = ["1/", "1/bla.txt", "test1.txt", "test2.txt"];

pub const WITH_ROOT: [&str; 5] = [
    "testfolder/",
    "testfolder/1/",
    "testfolder/1/bla.txt",
    "testfolder/test1.txt",
    "testfolder/test2.txt",
];
