//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Library code emits `tracing` events; the binary installs a subscriber that
//! writes them to stderr so they never mix with game output on stdout.
//!
//! # Log Levels
//!
//! - `warn` (default): fallbacks such as an empty root word pool
//! - `info` (`-v`): session start and new rounds
//! - `debug` (`-vv`): every accepted or rejected word
//! - `trace` (`-vvv`)
//!
//! `RUST_LOG` overrides the level chosen from the verbosity flag.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a log level
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let level = level_for_verbosity(verbosity);

    tracing_subscriber::registry()
        .with(build_env_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Dependencies stay at warn
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,word_scramble={level}"))
    })
}
