//! Tracing setup: a log file under the XDG state directory, stderr otherwise.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,luach=debug,luach_core=debug,luach_cli=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
}

/// Per-event handle on the shared log file. Falls back to stderr for an
/// event if the descriptor can't be duplicated.
enum EventWriter {
    File(File),
    Stderr(io::Stderr),
}

impl Write for EventWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventWriter::File(f) => f.write(buf),
            EventWriter::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventWriter::File(f) => f.flush(),
            EventWriter::Stderr(e) => e.flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EventWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventWriter::File(f),
            Err(_) => EventWriter::Stderr(io::stderr()),
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/luach/luach.log` (usually `~/.local/state/luach/luach.log`).
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("luach")?;
    Ok(dirs.get_state_home().join("luach.log"))
}

/// Install the global subscriber, appending to the log file when possible
/// and writing to stderr when not. `RUST_LOG` overrides the default filter.
pub fn init() -> LogTarget {
    let path = match log_file_path() {
        Ok(p) => p,
        Err(e) => return stderr_fallback(&e),
    };
    match init_file(&path) {
        Ok(()) => {
            tracing::info!("luach logging to {}", path.display());
            LogTarget::File(path)
        }
        Err(e) => stderr_fallback(&e),
    }
}

fn stderr_fallback(reason: &anyhow::Error) -> LogTarget {
    init_stderr();
    tracing::debug!("log file unavailable ({:#}); logging to stderr", reason);
    LogTarget::Stderr
}

/// Subscriber appending to `path`. Fails if the file can't be opened or a
/// global subscriber is already set.
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(LogFile(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber: {}", e))
}

/// Subscriber writing to stderr. A no-op if one is already installed.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
