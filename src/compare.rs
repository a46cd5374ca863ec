use std::fmt;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

use crate::error::CompareError;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Upper bound on each read buffer; larger chunk sizes are clamped to it.
pub const MAX_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Why a comparison stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Identical,
    /// Lengths differ; neither file was opened.
    SizeMismatch { left: u64, right: u64 },
    /// First differing byte, as an absolute offset.
    ContentMismatch { offset: u64 },
    /// The two streams returned different byte counts for the same chunk.
    LengthMismatch { offset: u64 },
    /// A read failed mid-stream.
    ReadFailed { offset: u64 },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Identical => write!(f, "identical"),
            Verdict::SizeMismatch { left, right } => {
                write!(f, "sizes differ ({left} vs {right} bytes)")
            }
            Verdict::ContentMismatch { offset } => write!(f, "first difference at byte {offset}"),
            Verdict::LengthMismatch { offset } => {
                write!(f, "streams diverged in length at byte {offset}")
            }
            Verdict::ReadFailed { offset } => write!(f, "read failed at byte {offset}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub verdict: Verdict,
    /// Bytes confirmed equal before the comparison stopped.
    pub bytes_compared: u64,
}

impl Comparison {
    pub fn is_identical(&self) -> bool {
        self.verdict == Verdict::Identical
    }
}

/// Returns whether the two files hold exactly the same bytes.
pub fn compare(left: &Path, right: &Path, chunk_size: usize) -> Result<bool, CompareError> {
    compare_detailed(left, right, chunk_size).map(|c| c.is_identical())
}

/// Compares two files chunk by chunk and reports where they diverge.
///
/// Sizes are checked first, so files of different length are rejected
/// without reading a byte. A read error once both files are open is logged
/// and reported as [`Verdict::ReadFailed`] rather than returned.
pub fn compare_detailed(
    left: &Path,
    right: &Path,
    chunk_size: usize,
) -> Result<Comparison, CompareError> {
    if chunk_size == 0 {
        return Err(CompareError::InvalidChunkSize);
    }

    let left_len = file_len(left)?;
    let right_len = file_len(right)?;

    if left_len != right_len {
        tracing::debug!(left_len, right_len, "size mismatch, skipping content check");
        return Ok(Comparison {
            verdict: Verdict::SizeMismatch {
                left: left_len,
                right: right_len,
            },
            bytes_compared: 0,
        });
    }

    let mut left_file = File::open(left).map_err(|e| CompareError::unreadable(left, e))?;
    let mut right_file = File::open(right).map_err(|e| CompareError::unreadable(right, e))?;

    let capacity = buffer_capacity(chunk_size, left_len);

    tracing::debug!(
        left = %left.display(),
        right = %right.display(),
        len = left_len,
        capacity,
        "comparing contents"
    );

    Ok(compare_readers(
        (&mut left_file, left),
        (&mut right_file, right),
        capacity,
    ))
}

/// Buffer size actually used for a chunk: never past the file length nor
/// [`MAX_CHUNK_SIZE`], never zero.
fn buffer_capacity(chunk_size: usize, file_size: u64) -> usize {
    let len = usize::try_from(file_size).unwrap_or(usize::MAX);
    chunk_size.min(len).min(MAX_CHUNK_SIZE).max(1)
}

fn file_len(path: &Path) -> Result<u64, CompareError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(CompareError::MissingFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(CompareError::unreadable(path, e)),
    };
    if !meta.is_file() {
        return Err(CompareError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(meta.len())
}

/// Lockstep loop over two readers; the paths are only used for log context.
fn compare_readers<L: Read, R: Read>(
    (left, left_path): (&mut L, &Path),
    (right, right_path): (&mut R, &Path),
    capacity: usize,
) -> Comparison {
    let mut left_buf = vec![0u8; capacity];
    let mut right_buf = vec![0u8; capacity];
    let mut offset: u64 = 0;

    let stop = |verdict: Verdict, offset: u64| Comparison {
        verdict,
        bytes_compared: offset,
    };

    loop {
        let left_n = match fill_chunk(left, &mut left_buf) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(path = %left_path.display(), offset, "read failed: {}", e);
                return stop(Verdict::ReadFailed { offset }, offset);
            }
        };
        let right_n = match fill_chunk(right, &mut right_buf) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(path = %right_path.display(), offset, "read failed: {}", e);
                return stop(Verdict::ReadFailed { offset }, offset);
            }
        };

        if left_n != right_n {
            let at = offset + left_n.min(right_n) as u64;
            tracing::debug!(left_n, right_n, offset = at, "chunk lengths differ");
            return stop(Verdict::LengthMismatch { offset: at }, offset);
        }
        if left_n == 0 {
            return stop(Verdict::Identical, offset);
        }

        if let Some(i) = left_buf[..left_n]
            .iter()
            .zip(&right_buf[..right_n])
            .position(|(a, b)| a != b)
        {
            let at = offset + i as u64;
            return stop(Verdict::ContentMismatch { offset: at }, at);
        }
        offset += left_n as u64;
    }
}

/// Reads until `buf` is full or the stream ends. A bare `read` may return
/// short, which would make two equal files look misaligned.
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
