//! Log output for the dashboard.
//!
//! The terminal belongs to the UI, so native builds log to `diagdash.log` in
//! the data directory. Web builds log to the browser console.

#[cfg(feature = "native")]
use std::fs::{self, File, OpenOptions};
#[cfg(feature = "native")]
use std::io::{Read, Seek, SeekFrom, Write};
#[cfg(feature = "native")]
use std::path::Path;
#[cfg(feature = "native")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "native")]
use tracing_subscriber::fmt::MakeWriter;
#[cfg(feature = "native")]
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "native")]
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
#[cfg(feature = "native")]
const KEEP_SIZE: u64 = 1024 * 1024;

#[cfg(feature = "native")]
pub const LOG_FILE_NAME: &str = "diagdash.log";

/// Truncate `log_path` to its newest whole lines once it grows past `max_size`.
///
/// At most `keep_size` bytes survive, behind a marker line.
#[cfg(feature = "native")]
fn rotate_log_if_needed(log_path: &Path, max_size: u64, keep_size: u64) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let metadata = fs::metadata(log_path)?;
    if metadata.len() <= max_size {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    let start_pos = metadata.len().saturating_sub(keep_size);

    file.seek(SeekFrom::Start(start_pos))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    // Drop the partial first line
    let skip = buffer
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&buffer[skip..])?;

    Ok(())
}

/// Hands every tracing event a handle to the one open log file.
#[cfg(feature = "native")]
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

#[cfg(feature = "native")]
struct LogWriter {
    file: Arc<Mutex<File>>,
}

#[cfg(feature = "native")]
impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| std::io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

#[cfg(feature = "native")]
impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Install the global subscriber for the terminal dashboard.
///
/// `RUST_LOG` overrides `level`, which only applies to the `diagdash` target;
/// the core crate logs warnings and above. A log past 5 MB is cut back to
/// its last 1 MB before it is reopened.
#[cfg(feature = "native")]
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    let rotation = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let writer_factory = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("diagdash={level},diagdash_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer_factory)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    if let Err(e) = rotation {
        tracing::warn!(error = %e, "Log rotation failed, appending to the full log");
    }
    tracing::info!(log_path = %log_path.display(), "Logging started");
    Ok(())
}

/// Route tracing output to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
