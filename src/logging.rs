use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path. The filter comes from `RUST_LOG`.
pub const LOG_PATH_ENV: &str = "STEPWISE_LOG";

/// Initialize tracing with file output.
///
/// The terminal front end owns the screen, so nothing is ever written to
/// stdout or stderr. Logging stays off unless `STEPWISE_LOG` names a file
/// or `--debug` was passed, in which case the log goes to
/// [`default_log_path`].
///
/// Log files get a `{path}.{timestamp}.{pid}` name so concurrent runs do
/// not clobber each other.
pub fn init_tracing(debug: bool) -> Option<PathBuf> {
    let base = match std::env::var_os(LOG_PATH_ENV) {
        Some(path) => PathBuf::from(path),
        None if debug => default_log_path()?,
        None => return None,
    };

    let unique_path = unique_log_path(&base);
    if let Some(parent) = unique_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return None;
        }
    }
    let file = std::fs::File::create(&unique_path).ok()?;

    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(unique_path)
}

/// `<cache dir>/stepwise/stepwise.log`
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("stepwise").join("stepwise.log"))
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(name)
}
