//! Log file and observer sinks.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{DiagnosticLine, Severity};

/// Callback invoked for every delivered line of the severity it was
/// registered for.
pub type Observer = Box<dyn FnMut(&DiagnosticLine)>;

/// Token returned by observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Registered observer callbacks, keyed by severity.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    entries: Vec<(ObserverId, Severity, Observer)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, severity: Severity, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, severity, observer));
        id
    }

    /// Remove an observer. Returns false if the id was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invoke every observer registered for the line's severity.
    pub fn notify(&mut self, line: &DiagnosticLine) {
        for (_, severity, observer) in self.entries.iter_mut() {
            if *severity == line.severity() {
                observer(line);
            }
        }
    }
}

/// Append-only transcript on disk.
///
/// The file is opened, appended to and closed on every write so no handle
/// outlives a single call.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Create the file, truncating anything left from a previous run.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        fs::write(&path, "").map_err(|e| Error::Io {
            path: path.clone(),
            message: format!("Failed to create log file: {}", e),
        })?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Io {
                path: self.path.clone(),
                message: format!("Failed to open log file: {}", e),
            })?;

        file.write_all(text.as_bytes()).map_err(|e| Error::Io {
            path: self.path.clone(),
            message: format!("Failed to write log file: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn test_create_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        fs::write(&path, "stale contents\n").unwrap();

        let log = LogFile::create(&path).unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "");
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempdir().unwrap();
        let log = LogFile::create(dir.path().join("run.log")).unwrap();

        log.append("one\n").unwrap();
        log.append("two\n").unwrap();

        assert_eq!(fs::read_to_string(log.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_append_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("gone");
        fs::create_dir(&nested).unwrap();
        let log = LogFile::create(nested.join("run.log")).unwrap();
        fs::remove_dir_all(&nested).unwrap();

        assert!(matches!(log.append("lost\n"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_observers_filtered_by_severity() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        let sink = seen.clone();
        registry.register(
            Severity::Warning,
            Box::new(move |line| sink.borrow_mut().push(line.text().to_string())),
        );

        registry.notify(&DiagnosticLine::new(Severity::Info, "ignored"));
        registry.notify(&DiagnosticLine::new(Severity::Warning, "careful"));

        assert_eq!(*seen.borrow(), vec!["careful\n".to_string()]);
    }

    #[test]
    fn test_unregister() {
        let mut registry = ObserverRegistry::new();
        let id = registry.register(Severity::Info, Box::new(|_| {}));
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
    }
}
