use crate::error::{Error, Result};
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the non-blocking writer alive for the whole process
static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Install a file logger. `log_level` is an `EnvFilter` directive such as
/// `debug` or `sift_core=trace`, `info` when absent. Only the first call
/// installs anything, later calls just return the path.
pub fn init_tracing(log_file_path: &str, log_level: Option<&str>) -> Result<String> {
    if LOG_GUARD.get().is_some() {
        return Ok(log_file_path.to_string());
    }

    let path = Path::new(log_file_path);
    let directory = path.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(directory) = directory {
        std::fs::create_dir_all(directory).map_err(Error::CreateLogDir)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| Error::TracingInit(format!("{} is not a file path", log_file_path)))?;
    let appender = tracing_appender::rolling::never(directory.unwrap_or(Path::new(".")), file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_new(log_level.unwrap_or("info"))
        .map_err(|e| Error::TracingInit(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .try_init()
        .map_err(|e| Error::TracingInit(e.to_string()))?;

    // A concurrent caller may have won the race, its guard is kept instead
    let _ = LOG_GUARD.set(guard);

    install_panic_hook();
    tracing::info!(log_file_path, "Tracing initialized");

    Ok(log_file_path.to_string())
}

/// Log panics before the default hook prints them
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "Panic in sift");
        default_hook(info);
    }));
}
