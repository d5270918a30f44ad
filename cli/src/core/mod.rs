//! # PackRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the library and
//! the command-line interface.
//!
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error kinds and the crate-wide `Result` alias
//!
pub mod config;
pub mod error;
