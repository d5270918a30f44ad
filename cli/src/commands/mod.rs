//! # PackRS Command Handlers
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each top-level `packrs` subcommand lives in its own module here, exposing
//! an arguments struct (parsed by Clap) and a `handle_*` function called from
//! `main.rs`.
//!
//! - `pack`: Create a zip or tar.gz archive from directories, files, and stdin.
//!
pub mod pack;
