//
// lib.rs
// filecmp
//
// Library entry that re-exports modules so the binary and tests can reach argument handling, the chunked comparator, and reporting.
//
// Thales Matheus Mendonça Santos - October 2026
//
// Public crate interface: re-export modules used by the binary and tests.
pub mod cli;
pub mod compare;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod runner;
pub mod utils;

pub use cli::{build_options, Args, Options};
pub use compare::{
    compare, compare_detailed, Comparison, Verdict, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE,
};
pub use error::CompareError;
pub use runner::{run, run_filecmp, Outcome};
