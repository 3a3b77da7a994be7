use chrono::Local;
use fern::{
    Dispatch,
    colors::{Color, ColoredLevelConfig},
};
use log::LevelFilter;

use crate::error::Result;

/// Resolve the log level, letting `RUST_LOG` override `default`
#[must_use]
pub fn level_from_env(default: LevelFilter) -> LevelFilter {
    parse_level(std::env::var("RUST_LOG").ok().as_deref(), default)
}

/// Parse an override level, keeping `default` when it is absent or unparsable
#[must_use]
pub fn parse_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|level| level.parse().ok()).unwrap_or(default)
}

/// Installs the global logger, writing colored lines to stderr
///
/// Stdout stays reserved for the demo's status output.
///
/// # Errors
///
/// Returns a `BookingError::Logger` if a logger is already installed
pub fn init(level: LevelFilter) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stderr())
        .apply()?;

    log::debug!(target: "booking", "logger initialized at {level}");
    Ok(())
}
