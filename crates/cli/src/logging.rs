//! Subscriber setup: a stderr layer plus an optional log file.
//!
//! stdout is reserved for command output, so every event goes to stderr or
//! the file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tokenparser_core::config::ResolvedConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter_for(&cfg.logging.level, LevelFilter::INFO));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.logging.file else {
        registry.init();
        return;
    };

    // file_level falls back to the stderr level
    let file_level = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
    let file_layer = fmt::layer()
        .with_writer(open_log_file(path))
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_for(file_level, LevelFilter::DEBUG));

    registry.with(file_layer).init();
}

/// `RUST_LOG` directives on top of `level` (or `fallback` when unparsable).
fn filter_for(level: &str, fallback: LevelFilter) -> EnvFilter {
    let level = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

/// Open `path` behind a non-blocking writer whose guard lives in [`LOG_GUARD`].
///
/// Exits with status 2 when the file cannot be created.
fn open_log_file(path: &Path) -> NonBlocking {
    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {}", path.display(), e);
        std::process::exit(2);
    });

    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }
    writer
}

/// Drop the file writer guard, flushing buffered lines.
///
/// Statics are never dropped and `process::exit` skips destructors, so this
/// runs before every exit.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.trim().to_lowercase().as_str() {
        "off" | "silent" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
