use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::cli::{build_options, Args, Options};
use crate::compare::{compare_detailed, Comparison};
use crate::prompt::Prompter;

#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    pub comparison: Comparison,
    pub elapsed: Duration,
}

/// Runs one comparison and times it. Only the comparison itself is timed,
/// not option resolution or prompting.
pub fn run_filecmp(opts: &Options) -> Result<Outcome> {
    let start = Instant::now();
    let comparison = compare_detailed(&opts.left, &opts.right, opts.chunk_size)
        .with_context(|| {
            format!(
                "Cannot compare {} and {}",
                opts.left.display(),
                opts.right.display()
            )
        })?;
    let elapsed = start.elapsed();

    tracing::info!(
        verdict = %comparison.verdict,
        bytes = comparison.bytes_compared,
        chunk_size = opts.chunk_size,
        "comparison finished"
    );

    Ok(Outcome {
        comparison,
        elapsed,
    })
}

pub fn write_report<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    if outcome.comparison.is_identical() {
        writeln!(out, "Files are identical.")?;
    } else {
        writeln!(out, "Files are not identical.")?;
    }
    writeln!(
        out,
        "Comparison took {:.4} seconds.",
        outcome.elapsed.as_secs_f64()
    )
}

/// Whole program minus process setup: resolve options (prompting on
/// `input`/`output` when needed), compare, print the report to `output`.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, mut output: W) -> Result<Outcome> {
    let opts = {
        let mut prompter = Prompter::new(input, &mut output);
        build_options(args, &mut prompter)?
    };
    tracing::debug!(?opts, "resolved options");

    let outcome = run_filecmp(&opts)?;
    write_report(&mut output, &outcome).context("Failed to write report")?;
    Ok(outcome)
}
