use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::prompt::Prompter;
use crate::utils::resolve_chunk_size;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check whether two files are byte-identical", long_about = None)]
pub struct Args {
    /// First file (prompted for when omitted)
    pub file1: Option<PathBuf>,

    /// Second file (prompted for when omitted)
    pub file2: Option<PathBuf>,

    /// Bytes read per chunk (e.g., 4096, 64KiB); invalid values fall back to 4096, values above 8MiB are capped
    #[arg(allow_hyphen_values = true)]
    pub chunk_size: Option<String>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub left: PathBuf,
    pub right: PathBuf,
    pub chunk_size: usize,
}

/// Resolves arguments into options, asking `prompter` for whatever the
/// command line left out.
pub fn build_options<R: BufRead, W: Write>(
    args: &Args,
    prompter: &mut Prompter<R, W>,
) -> Result<Options> {
    let interactive = args.file1.is_none() || args.file2.is_none();

    let left = match &args.file1 {
        Some(p) => p.clone(),
        None => prompter.path("Enter path for first file: ")?,
    };
    let right = match &args.file2 {
        Some(p) => p.clone(),
        None => prompter.path("Enter path for second file: ")?,
    };

    let chunk_size = match (&args.chunk_size, interactive) {
        (Some(raw), _) => resolve_chunk_size(Some(raw.as_str())),
        (None, true) => prompter.chunk_size("Enter chunk size in bytes (default 4096): ")?,
        (None, false) => resolve_chunk_size(None),
    };

    Ok(Options {
        left,
        right,
        chunk_size,
    })
}
