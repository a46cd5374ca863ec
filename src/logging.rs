use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count; `RUST_LOG` still wins when set.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,filecmp=info",
        _ => "info,filecmp=debug",
    }
}

/// Install a stderr subscriber, keeping stdout for the report. Safe to call
/// more than once; the first subscriber stays in place.
pub fn init_logging(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        tracing::debug!("keeping existing subscriber: {}", e);
    }
}
