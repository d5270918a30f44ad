//! # PackRS Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! This module implements `packrs pack`, which writes one archive from any mix
//! of directories, single files, and standard input.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Load the configuration for the default format, include-root mode, and output directory.
//! 2. Resolve the destination: flags beat configuration, and a relative output
//!    path is placed under `output_dir` when one is configured.
//! 3. Create the archive. The writer normalizes the extension for the format.
//! 4. Add each source in order: directories through `add_all`, anything else
//!    through `add_file`.
//! 5. With `--stdin-name`, read standard input and add it as one entry.
//! 6. Close the archive and report where it was written.
//!
//! A failure stops the command. A partial archive may be left behind.
//!
//! ## Examples
//!
//! ```bash
//! # Zip the contents of ./site (no top-level folder inside the archive)
//! packrs pack site-backup site/
//!
//! # Gzipped tarball nesting everything under "site/"
//! packrs pack --format tar --include-root site-backup site/
//!
//! # Mix a directory, a single file, and piped data
//! git log | packrs pack --stdin-name CHANGES.txt release.zip dist/ LICENSE
//! ```
//!
use anyhow::Context;
use clap::Parser;
use packrs::common::archive::{ArchiveFormat, ArchiveWriter};
use packrs::common::fs::io::{ensure_dir_exists, LocalFs};
use packrs::common::fs::SourceFs;
use packrs::core::config::{self, Config};
use packrs::core::error::Result;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// # Pack Arguments (`PackArgs`)
///
/// Defines the command-line arguments accepted by `packrs pack`.
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Archive format to produce: "zip" or "tar" (gzipped). Defaults to the configured format.
    #[arg(short, long)]
    format: Option<ArchiveFormat>,

    /// Nest directory contents under the directory's own name inside the archive.
    #[arg(short = 'r', long)]
    include_root: bool,

    /// Read standard input and store it as an entry with this name.
    #[arg(long, value_name = "NAME")]
    stdin_name: Option<String>,

    /// Archive to create. The extension is adjusted to match the format.
    output: String,

    /// Directories and files to add, in order.
    #[arg(required_unless_present = "stdin_name")]
    sources: Vec<String>,
}

/// # Handle Pack Command (`handle_pack`)
///
/// Loads configuration, runs the pack, and prints where the archive went.
pub fn handle_pack(args: PackArgs) -> Result<()> {
    info!("Handling pack command...");
    debug!("Pack args: {:?}", args);
    let cfg = config::load_config().context("Failed to load PackRS configuration")?;
    let (path, sources) = run_pack(args, &cfg)?;
    println!("Created {} ({} source(s))", path.display(), sources);
    Ok(())
}

/// Writes the archive and returns its path and the number of sources added.
fn run_pack(args: PackArgs, cfg: &Config) -> Result<(PathBuf, usize)> {
    let format = match args.format {
        Some(format) => format,
        None => cfg.format()?,
    };
    let include_root = args.include_root || cfg.defaults.include_root;
    let output = resolve_output(&args.output, cfg.defaults.output_dir.as_deref())?;

    let mut writer = ArchiveWriter::create(format, &output)?;
    debug!(
        "Writing {} archive to {}",
        writer.format(),
        writer.destination().display()
    );
    for source in &args.sources {
        if LocalFs.is_dir(source)? {
            info!("Adding directory {}", source);
            writer
                .add_all(source, include_root)
                .with_context(|| format!("Failed to add directory '{}'", source))?;
        } else {
            info!("Adding file {}", source);
            writer
                .add_file(source)
                .with_context(|| format!("Failed to add file '{}'", source))?;
        }
    }

    let mut sources = args.sources.len();
    if let Some(name) = &args.stdin_name {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Failed to read standard input")?;
        writer.add(name, &data)?;
        sources += 1;
    }

    let path = writer.close()?;
    Ok((path, sources))
}

/// Places a relative `output` under `output_dir`, creating that directory if needed.
fn resolve_output(output: &str, output_dir: Option<&str>) -> Result<String> {
    let Some(dir) = output_dir else {
        return Ok(output.to_string());
    };
    if Path::new(output).is_absolute() {
        return Ok(output.to_string());
    }
    let dir = PathBuf::from(dir);
    ensure_dir_exists(&dir)?;
    Ok(dir.join(output).to_string_lossy().into_owned())
}
