//! tiled2unity - Tiled map export front end
//!
//! Resolves an export request (command-line flags and positional paths)
//! into a validated job for the map conversion engine, reporting every
//! step through a fan-out diagnostic log.

pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod job;
pub mod output;
pub mod settings;

pub use cli::{JobResolver, Options, ParsedOptions};
pub use diagnostics::{Broadcaster, DiagnosticLine, ObserverId, Severity};
pub use error::{Error, ResolveError, ResolveErrorKind, Result};
pub use geometry::Vector3D;
pub use job::{dispatch, exported_filename, Completion, ExportConfiguration, ExportEngine};
pub use settings::{FileSettings, MemorySettings, SettingsStore};
