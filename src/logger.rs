//! Console logging setup.
//!
//! Thin fern dispatch over the `log` facade: timestamped lines, colored
//! levels, level configurable via the settings file. HTTP and Telegram
//! internals are pinned to warn so report traffic stays readable.

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Initialize the global logger. Call once at startup, before any logging.
pub fn init(level: &str) -> Result<(), log::SetLoggerError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Magenta)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(parse_level(level))
        .level_for("teloxide", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" | "warning" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" | "verbose" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
