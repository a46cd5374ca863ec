use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::utils::resolve_chunk_size;

/// Line-oriented questions over any reader/writer pair, so the
/// interactive fallback can be driven from tests as well as a terminal.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Reads one line after showing `question`; `None` means end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to write prompt")?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn path(&mut self, question: &str) -> Result<PathBuf> {
        match self.ask(question)? {
            Some(line) if !line.trim().is_empty() => Ok(PathBuf::from(line)),
            Some(_) => bail!("No path given"),
            None => bail!("Input closed before a path was given"),
        }
    }

    /// Blank or missing answers pick the default quietly; anything else
    /// goes through the same fallback as the command-line argument.
    pub fn chunk_size(&mut self, question: &str) -> Result<usize> {
        let answer = self.ask(question)?;
        let raw = answer.as_deref().map(str::trim).filter(|s| !s.is_empty());
        Ok(resolve_chunk_size(raw))
    }
}
