//! Process-level logging for devterm.
//!
//! This is the tracing setup for the process, not the in-terminal console
//! (see `devterm::console` for that). Events always go to a log file; stdout
//! logging is added when `DEVTERM_LOG` or `RUST_LOG` is set, or in debug
//! builds.
//!
//! ## Environment Variables
//!
//! 1. **`DEVTERM_LOG`** (highest priority) - devterm-specific filter. A bare
//!    level like `debug` is expanded to cover the devterm crates only.
//! 2. **`RUST_LOG`** - standard tracing filter, used verbatim.
//! 3. **Default** - `warn` globally, `info` for the devterm crates.
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/devterm/logs/devterm-<pid>.log`, overridable
//! with `--log-file <path>`.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Crates covered when expanding a bare `DEVTERM_LOG` level.
const CRATE_FILTERS: &[&str] = &["devterm", "devterm_bin", "devterm_device", "devterm_log"];

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Returned from [`init`]; must be held alive for the lifetime of the
/// program -- dropping it flushes and stops the background file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Initialize logging with an optional log-file override.
///
/// Safe to call when logging is already initialized; the error from
/// `try_init` is propagated so callers can decide to ignore it.
pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard, InitError> {
    let (dir, filename) = log_destination(log_file);
    std::fs::create_dir_all(&dir).ok();

    let appender = tracing_appender::rolling::never(&dir, &filename);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_wanted =
        env::var("DEVTERM_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);
    let stdout_layer = stdout_wanted.then(|| fmt::layer().with_filter(env_filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: dir.join(filename),
    })
}

/// Initialize stdout-only logging for tests.
///
/// Will not panic if called repeatedly or if another test already installed
/// a subscriber.
pub fn test() {
    let _ = fmt().with_env_filter(env_filter()).try_init();
}

/// Split the destination into directory and file name.
///
/// An override ending in a file name is used as-is; an override naming a
/// directory gets the default pid-stamped file name inside it.
fn log_destination(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let default_name = format!("devterm-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(default_name);
            return (dir, name);
        }
        return (path, default_name);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devterm")
        .join("logs");
    (dir, default_name)
}

/// File filter: user filter if one is set, `warn` otherwise.
fn file_filter() -> EnvFilter {
    if env::var("DEVTERM_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return env_filter();
    }
    EnvFilter::new("warn")
}

/// Build the filter from the environment: `DEVTERM_LOG` > `RUST_LOG` > defaults.
fn env_filter() -> EnvFilter {
    if let Ok(devterm_log) = env::var("DEVTERM_LOG") {
        return expand_devterm_log(&devterm_log);
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new(default_directives())
}

fn default_directives() -> String {
    let per_crate: Vec<String> = CRATE_FILTERS.iter().map(|c| format!("{c}=info")).collect();
    format!("warn,{}", per_crate.join(","))
}

/// Expand a bare `DEVTERM_LOG` level into per-crate directives.
///
/// `DEVTERM_LOG=debug` becomes `warn,devterm=debug,...`; anything containing
/// directive syntax (`=`, `,`, `:`) is passed through untouched so advanced
/// filters keep working.
fn expand_devterm_log(value: &str) -> EnvFilter {
    if value.contains('=') || value.contains(',') || value.contains(':') {
        return EnvFilter::new(value);
    }
    let per_crate: Vec<String> = CRATE_FILTERS.iter().map(|c| format!("{c}={value}")).collect();
    EnvFilter::new(format!("warn,{}", per_crate.join(",")))
}
