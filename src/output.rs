//! Terminal output formatting for the tiled2unity CLI.
//!
//! The console sink of the diagnostic broadcaster. Lines go to stdout so
//! that the console transcript matches the log file; colour is applied per
//! severity when stdout is a terminal.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::diagnostics::{DiagnosticLine, Severity};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Terminal-aware line printer.
pub struct Printer {
    color: bool,
    out: Box<dyn Write>,
}

impl Printer {
    /// Printer on stdout, coloured when stdout is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stdout().is_terminal(),
            out: Box::new(io::stdout()),
        }
    }

    /// Printer on an arbitrary writer, never coloured.
    pub fn to_writer(out: Box<dyn Write>) -> Self {
        Self { color: false, out }
    }

    /// Write one broadcast line. Console failures are ignored; the log
    /// file is the durable record.
    pub fn write_line(&mut self, line: &DiagnosticLine) {
        let text = line.text();
        let style = match line.severity() {
            Severity::Info => None,
            Severity::Warning => Some(YELLOW),
            Severity::Error => Some(RED),
            Severity::Success => Some(GREEN),
            Severity::Verbose => Some(DIM),
        };

        let _ = match style {
            Some(color) if self.color => {
                let body = text.strip_suffix('\n').unwrap_or(text);
                writeln!(self.out, "{BOLD}{color}{body}{RESET}")
            }
            _ => write!(self.out, "{text}"),
        };
        let _ = self.out.flush();
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_receives_plain_text() {
        let capture = Capture::default();
        let mut printer = Printer::to_writer(Box::new(capture.clone()));

        printer.write_line(&DiagnosticLine::new(Severity::Error, "broken"));
        printer.write_line(&DiagnosticLine::new(Severity::Info, "fine"));

        let written = String::from_utf8(capture.0.borrow().clone()).unwrap();
        assert_eq!(written, "broken\nfine\n");
    }

    #[test]
    fn test_display_path_absolute() {
        // An absolute path outside cwd should stay absolute
        let p = Path::new("/nonexistent/path/to/file");
        assert_eq!(display_path(p), "/nonexistent/path/to/file");
    }
}
