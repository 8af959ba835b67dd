//! Command-line front end: option schema, help text and job resolution.

pub mod help;
pub mod options;
pub mod resolve;

use std::fs;
use std::path::Path;

use crate::diagnostics::Broadcaster;
use crate::error::{Error, Result};
use crate::job::ExportConfiguration;
use crate::output::display_path;
use crate::settings::SettingsStore;

pub use help::{help_lines, print_help, VERSION};
pub use options::{Options, ParsedOptions};
pub use resolve::{JobResolver, PROJECT_MARKER};

/// File written by `--write-version-file`.
pub const VERSION_FILENAME: &str = "t2u-version.txt";

/// True when the only argument asks for the version file.
pub fn wants_version_file(args: &[String]) -> bool {
    matches!(args, [only] if only == "--write-version-file")
}

/// Write the version string to `path`.
pub fn write_version_file(path: &Path) -> Result<()> {
    fs::write(path, VERSION).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write version file: {}", e),
    })
}

/// Resolve a job from the command line and report what will be exported.
///
/// No conversion engine is linked into the binary; the resolved job is the
/// hand-off point for one.
pub fn run(
    args: &[String],
    settings: &mut dyn SettingsStore,
    log: &mut Broadcaster,
) -> Result<ExportConfiguration> {
    let job = JobResolver::new(settings, log)?.resolve(args)?;

    let target = match &job.export_dir {
        Some(dir) => display_path(dir),
        None => "(no Unity project selected)".to_string(),
    };
    log.success(format!(
        "Ready to export {} -> {}",
        display_path(&job.tmx_path),
        target
    ))?;

    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_wants_version_file() {
        assert!(wants_version_file(&["--write-version-file".to_string()]));
        assert!(!wants_version_file(&[]));
        assert!(!wants_version_file(&[
            "--write-version-file".to_string(),
            "map.tmx".to_string()
        ]));
    }

    #[test]
    fn test_write_version_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(VERSION_FILENAME);

        write_version_file(&path).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), VERSION);
    }
}
