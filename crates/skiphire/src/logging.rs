use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "skiphire.log";

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Size to keep after rotation (1 MB of most recent logs)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Rotate log file if it exceeds `max_size`.
/// Keeps only the most recent `keep_size` bytes, starting at a line boundary.
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> std::io::Result<bool> {
    if !log_path.exists() {
        return Ok(false);
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(false);
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);

    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Skip to the first newline to avoid partial lines
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&buffer[skip..])?;

    Ok(true)
}

/// Hands out writers that share one log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

impl LogWriterFactory {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Filter used when `RUST_LOG` is unset. The core crate only logs warnings.
fn default_filter(level: &str) -> String {
    format!("skiphire={level},skiphire_core=warn")
}

/// One-line description of where catalog requests will go
fn endpoint_summary(config: &AppConfig) -> String {
    match config.endpoint() {
        Ok(endpoint) => match endpoint.url_for(&config.location()) {
            Ok(url) => url.to_string(),
            Err(e) => format!("unusable ({e})"),
        },
        Err(e) => format!("unusable ({e})"),
    }
}

/// Record the resolved configuration at the top of a session's log
pub fn log_session_start(data_dir: &Path, config: &AppConfig) {
    let config_path = AppConfig::path(data_dir);
    tracing::info!(
        config_path = %config_path.display(),
        config_file = config_path.exists(),
        location = %config.location(),
        page_size = config.page_size().get(),
        timeout_secs = config.request_timeout().as_secs(),
        "Starting skip selection"
    );

    let summary = endpoint_summary(config);
    match config.endpoint() {
        Ok(_) => tracing::info!(catalog = %summary, "Catalog endpoint"),
        Err(_) => tracing::warn!(
            catalog = %summary,
            "Catalog endpoint not configured, set base_url or {}",
            crate::config::BASE_URL_ENV
        ),
    }
}

/// Initialize logging to `{data_dir}/skiphire.log`.
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr once
/// this returns. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(LogWriterFactory::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "SkipHire logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        assert!(!rotate_log_if_needed(&path, 10, 5).unwrap());
    }

    #[test]
    fn test_rotate_keeps_tail_on_line_boundary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "first line\nsecond line\nthird line\n").unwrap();

        assert!(rotate_log_if_needed(&path, 20, 16).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("--- Log rotated"));
        assert!(content.ends_with("third line\n"));
        assert!(!content.contains("first line"));
    }

    #[test]
    fn test_small_file_not_rotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(LOG_FILE_NAME);
        fs::write(&path, "short\n").unwrap();

        assert!(!rotate_log_if_needed(&path, 1024, 512).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_default_filter_quiets_core() {
        assert_eq!(default_filter("debug"), "skiphire=debug,skiphire_core=warn");
    }

    #[test]
    fn test_endpoint_summary() {
        let config = AppConfig {
            base_url: Some("http://localhost:8080".into()),
            ..Default::default()
        };
        assert_eq!(
            endpoint_summary(&config),
            "http://localhost:8080/api/skips/by-location?postcode=NR32&area=Lowestoft"
        );
        assert_eq!(
            endpoint_summary(&AppConfig::default()),
            "unusable (catalog base URL is not configured)"
        );
    }
}
