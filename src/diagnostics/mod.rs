//! Diagnostic broadcasting for tiled2unity.
//!
//! One `emit` call fans a message out to every interested consumer, in a
//! fixed order:
//!
//! 1. observer callbacks registered for the message's severity,
//! 2. the console,
//! 3. the log file (once [`Broadcaster::initialize_log`] has run).
//!
//! Verbose messages are dropped before reaching any sink unless verbose
//! output is enabled at the time of the call.
//!
//! # Example
//!
//! ```ignore
//! use tiled2unity::diagnostics::{Broadcaster, Severity};
//!
//! let mut log = Broadcaster::new();
//! log.initialize_log(&args)?;
//! log.error("TMXPATH file 'map.tmx' does not exist.")?;
//! ```

mod line;
mod sink;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use directories::ProjectDirs;

use crate::error::{Error, Result};
use crate::output::Printer;

pub use line::{DiagnosticLine, Severity};
pub use sink::{LogFile, Observer, ObserverId, ObserverRegistry};

/// Fixed name of the log file inside the application data directory.
pub const LOG_FILENAME: &str = "tiled2unity.log";

/// Per-user application data directory used for the log file.
pub fn data_dir() -> Result<PathBuf> {
    ProjectDirs::from("", "", "Tiled2Unity")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(Error::NoDataDir)
}

/// Fan-out logger for console, log file and registered observers.
pub struct Broadcaster {
    observers: ObserverRegistry,
    console: Option<Printer>,
    log: Option<LogFile>,
    verbose: bool,
}

impl Broadcaster {
    /// Broadcaster that prints to stdout.
    pub fn new() -> Self {
        Self::with_console(Printer::new())
    }

    pub fn with_console(console: Printer) -> Self {
        Self {
            observers: ObserverRegistry::new(),
            console: Some(console),
            log: None,
            verbose: false,
        }
    }

    /// Broadcaster with no console sink. Observers and the log file still
    /// receive lines.
    pub fn silent() -> Self {
        Self {
            observers: ObserverRegistry::new(),
            console: None,
            log: None,
            verbose: false,
        }
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn register(&mut self, severity: Severity, observer: Observer) -> ObserverId {
        self.observers.register(severity, observer)
    }

    pub fn unregister(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Path of the active log file, if logging has been started.
    pub fn log_path(&self) -> Option<&Path> {
        self.log.as_ref().map(|log| log.path())
    }

    /// Start the log in the per-user application data directory.
    pub fn initialize_log(&mut self, args: &[String]) -> Result<PathBuf> {
        let dir = data_dir()?;
        self.initialize_log_in(&dir, args)
    }

    /// Start the log in `dir`, creating the directory if needed and
    /// truncating any previous log file.
    ///
    /// The first lines written are a timestamp, the invocation arguments
    /// and the log path itself.
    pub fn initialize_log_in(&mut self, dir: &Path, args: &[String]) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| Error::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create log directory: {}", e),
        })?;

        let log = LogFile::create(dir.join(LOG_FILENAME))?;
        let path = log.path().to_path_buf();
        self.log = Some(log);

        self.info(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())?;
        self.info(format!("Tiled2Unity {}", args.join(" ")))?;
        self.info(format!("Log path: {}", path.display()))?;

        Ok(path)
    }

    /// Deliver one message to every sink.
    ///
    /// A log write failure is returned only after observers and console
    /// have been served.
    pub fn emit(&mut self, severity: Severity, message: impl Into<String>) -> Result<()> {
        if severity == Severity::Verbose && !self.verbose {
            return Ok(());
        }

        let line = DiagnosticLine::new(severity, message);

        self.observers.notify(&line);

        if let Some(console) = self.console.as_mut() {
            console.write_line(&line);
        }

        match &self.log {
            Some(log) => log.append(line.text()),
            None => Ok(()),
        }
    }

    pub fn info(&mut self, message: impl Into<String>) -> Result<()> {
        self.emit(Severity::Info, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Result<()> {
        self.emit(Severity::Warning, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> Result<()> {
        self.emit(Severity::Error, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> Result<()> {
        self.emit(Severity::Success, message)
    }

    pub fn verbose(&mut self, message: impl Into<String>) -> Result<()> {
        self.emit(Severity::Verbose, message)
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
