//! # Logger
//!
//! Installs the global `tracing` subscriber for the zoo binaries.
//!
//! Console lines go to **stderr**; the menus own stdout. File output is
//! opt-in through [`LoggerBuilder::files`], which rotates daily and keeps a
//! bounded number of files. `RUST_LOG` applies unless explicit directives were
//! given.
//!
//! ```rust
//! use zoo_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("zoo")
//!     .level(LevelFilter::DEBUG)
//!     .directives(Some("zoo_registry=trace".to_owned()))
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_KEEP: usize = 10;
const FILE_SUFFIX: &str = "log";

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Output state: stderr only.
#[derive(Debug)]
pub struct ConsoleOnly;

/// Output state: rolling files in a directory, stderr optional.
#[derive(Debug)]
pub struct Files {
    dir: PathBuf,
    keep: usize,
    json: bool,
}

mod private {
    pub trait Output {
        fn into_files(self) -> Option<super::Files>;
    }
}

impl private::Output for ConsoleOnly {
    fn into_files(self) -> Option<Files> {
        None
    }
}

impl private::Output for Files {
    fn into_files(self) -> Option<Files> {
        Some(self)
    }
}

/// Collects logger settings; file-only options appear after [`Self::files`].
#[derive(Debug)]
#[must_use = "Call `init` to install the subscriber."]
pub struct LoggerBuilder<O: private::Output = ConsoleOnly> {
    name: String,
    level: LevelFilter,
    directives: Option<String>,
    console: bool,
    output: O,
}

impl<O: private::Output> LoggerBuilder<O> {
    /// Level used for targets no directive mentions.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Per-target directives such as `zoo_registry=debug`; replaces `RUST_LOG`.
    pub fn directives(mut self, directives: Option<String>) -> Self {
        self.directives = directives;
        self
    }

    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Installs the subscriber for the whole process.
    ///
    /// # Errors
    /// [`LoggerError::InvalidConfiguration`] for a blank name, bad directives,
    /// `keep(0)` or no output at all; [`LoggerError::Appender`] when the log
    /// directory is unusable; [`LoggerError::Subscriber`] when a subscriber is
    /// already installed.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.trim().is_empty() {
            return Err(invalid("logger name cannot be empty"));
        }
        let filter = self.filter()?;

        let mut layers = Vec::new();
        if self.console {
            let ansi = io::stderr().is_terminal();
            layers.push(fmt::layer().compact().with_writer(io::stderr).with_ansi(ansi).boxed());
        }

        let guard = match self.output.into_files() {
            Some(files) => {
                let (layer, guard) = file_layer(&self.name, files)?;
                layers.push(layer);
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(invalid("console and file output are both disabled"));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;
        Ok(Logger { guard })
    }

    fn filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        match &self.directives {
            Some(directives) => builder
                .parse(directives)
                .map_err(|e| invalid(format!("bad log directives '{directives}': {e}"))),
            None => Ok(builder.from_env_lossy()),
        }
    }
}

impl LoggerBuilder<ConsoleOnly> {
    /// Also writes daily files named `<name>.<date>.log` into `dir`.
    pub fn files(self, dir: impl Into<PathBuf>) -> LoggerBuilder<Files> {
        LoggerBuilder {
            name: self.name,
            level: self.level,
            directives: self.directives,
            console: self.console,
            output: Files { dir: dir.into(), keep: DEFAULT_KEEP, json: false },
        }
    }
}

impl LoggerBuilder<Files> {
    /// How many rotated files survive.
    pub const fn keep(mut self, files: usize) -> Self {
        self.output.keep = files;
        self
    }

    /// JSON lines instead of plain text in the files.
    pub const fn json(mut self, enabled: bool) -> Self {
        self.output.json = enabled;
        self
    }
}

fn file_layer<S>(name: &str, files: Files) -> Result<(BoxedLayer<S>, WorkerGuard), LoggerError>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    if files.keep == 0 {
        return Err(invalid("at least one log file must be kept"));
    }
    fs::create_dir_all(&files.dir).map_err(|e| LoggerError::Internal {
        message: e.to_string().into(),
        context: Some(format!("creating {}", files.dir.display()).into()),
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .filename_suffix(FILE_SUFFIX)
        .max_log_files(files.keep)
        .build(&files.dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if files.json { layer.json().boxed() } else { layer.boxed() };
    Ok((layer, guard))
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> LoggerError {
    LoggerError::InvalidConfiguration { message: message.into(), context: None }
}

/// Keeps the file writer alive; dropping it flushes pending lines.
#[must_use = "Dropping this handle stops the background file writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a builder; `name` prefixes the log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            level: LevelFilter::INFO,
            directives: None,
            console: true,
            output: ConsoleOnly,
        }
    }

    /// `true` when a file writer is running.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Flushing log files");
        }
    }
}

/// Parses a level name such as `"warn"` or `"DEBUG"`.
///
/// # Errors
/// Returns [`LoggerError::InvalidConfiguration`] for unknown level names.
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggerError> {
    level.trim().parse::<LevelFilter>().map_err(|e| invalid(format!("Unknown log level '{level}': {e}")))
}
