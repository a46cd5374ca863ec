use std::io;

use anyhow::Result;
use clap::Parser;

use filecmp::{logging, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run(&args, stdin, stdout)?;

    Ok(())
}
