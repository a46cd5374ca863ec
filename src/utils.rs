use crate::compare::DEFAULT_CHUNK_SIZE;

/// Parses a byte count such as `4096`, `64k` or `1MiB`.
///
/// Returns 0 for anything that is not a non-negative size, which callers
/// treat as "use the default".
pub fn parse_size(s: &str) -> u64 {
    let s = s.trim().to_lowercase();
    let units = [
        ("gib", 1024u64.pow(3)),
        ("mib", 1024u64.pow(2)),
        ("kib", 1024),
        ("gb", 1000u64.pow(3)),
        ("mb", 1000u64.pow(2)),
        ("kb", 1000),
        ("g", 1000u64.pow(3)),
        ("m", 1000u64.pow(2)),
        ("k", 1000),
        ("b", 1),
    ];

    for (unit, mult) in units {
        if let Some(num) = s.strip_suffix(unit) {
            return match num.trim().parse::<f64>() {
                Ok(val) if val.is_finite() && val > 0.0 => (val * mult as f64) as u64,
                _ => 0,
            };
        }
    }
    s.parse().unwrap_or(0)
}

/// Turns user input into a usable chunk size, falling back to
/// [`DEFAULT_CHUNK_SIZE`] (with a warning) when the input is unusable.
pub fn resolve_chunk_size(input: Option<&str>) -> usize {
    let Some(raw) = input else {
        return DEFAULT_CHUNK_SIZE;
    };

    match usize::try_from(parse_size(raw)) {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(
                input = raw,
                "Invalid chunk size. Using default {} bytes.",
                DEFAULT_CHUNK_SIZE
            );
            DEFAULT_CHUNK_SIZE
        }
    }
}
