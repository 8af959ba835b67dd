use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// A precondition on the export request that the user has to correct.
///
/// None of these are retryable: the resolver reports them once, prints
/// help, and hands the failure back to whoever drove it.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Missing TMXPATH argument.")]
    #[diagnostic(
        code(tiled2unity::missing_input),
        help("Provide a path to a TMX file, or add %mapfile to the Tiled command")
    )]
    MissingInput,

    #[error("TMXPATH file '{}' does not exist.", path.display())]
    #[diagnostic(code(tiled2unity::input_not_found))]
    InputNotFound { path: PathBuf },

    #[error("UNITYDIR Unity Project Directory '{}' does not exist", path.display())]
    #[diagnostic(code(tiled2unity::output_dir_not_found))]
    OutputDirNotFound { path: PathBuf },

    #[error("UNITYDIR '{}' is not a Unity Project folder", path.display())]
    #[diagnostic(
        code(tiled2unity::output_dir_invalid),
        help("A Unity project folder contains an 'Assets' subdirectory")
    )]
    OutputDirInvalid { path: PathBuf },

    #[error("Auto-exporting is enabled but UNITYDIR is missing")]
    #[diagnostic(code(tiled2unity::output_dir_required))]
    OutputDirRequired,

    #[error("Too many arguments. Can't parse '{token}'")]
    #[diagnostic(code(tiled2unity::too_many_arguments))]
    TooManyArguments { token: String },
}

/// Payload-free discriminant of [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    MissingInput,
    InputNotFound,
    OutputDirNotFound,
    OutputDirInvalid,
    OutputDirRequired,
    TooManyArguments,
}

impl ResolveError {
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::MissingInput => ResolveErrorKind::MissingInput,
            ResolveError::InputNotFound { .. } => ResolveErrorKind::InputNotFound,
            ResolveError::OutputDirNotFound { .. } => ResolveErrorKind::OutputDirNotFound,
            ResolveError::OutputDirInvalid { .. } => ResolveErrorKind::OutputDirInvalid,
            ResolveError::OutputDirRequired => ResolveErrorKind::OutputDirRequired,
            ResolveError::TooManyArguments { .. } => ResolveErrorKind::TooManyArguments,
        }
    }
}

/// Main error type for tiled2unity operations
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Resolve(#[from] ResolveError),

    #[error("IO error: {0}")]
    #[diagnostic(code(tiled2unity::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(tiled2unity::io))]
    Io { path: PathBuf, message: String },

    #[error("Settings error: {message}")]
    #[diagnostic(code(tiled2unity::settings))]
    Settings {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Usage error: {message}")]
    #[diagnostic(code(tiled2unity::usage), help("Run with --help to list the options"))]
    Usage { message: String },

    #[error("Could not determine the per-user application data directory")]
    #[diagnostic(code(tiled2unity::no_data_dir))]
    NoDataDir,
}

impl Error {
    /// The resolution failure kind, if this is a user-correctable error.
    pub fn resolve_kind(&self) -> Option<ResolveErrorKind> {
        match self {
            Error::Resolve(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// Whether the resolver has already reported this error, with help,
    /// through the diagnostic log.
    pub fn is_reported(&self) -> bool {
        matches!(self, Error::Resolve(_) | Error::Usage { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_strips_payload() {
        let err = ResolveError::TooManyArguments {
            token: "extra".to_string(),
        };
        assert_eq!(err.kind(), ResolveErrorKind::TooManyArguments);
    }

    #[test]
    fn test_resolve_kind_through_crate_error() {
        let err: Error = ResolveError::OutputDirRequired.into();
        assert_eq!(err.resolve_kind(), Some(ResolveErrorKind::OutputDirRequired));

        let io: Error = std::io::Error::other("disk gone").into();
        assert_eq!(io.resolve_kind(), None);
        assert!(err.is_reported());
        assert!(!io.is_reported());
    }

    #[test]
    fn test_messages() {
        insta::assert_snapshot!(
            ResolveError::InputNotFound { path: PathBuf::from("/maps/level1.tmx") },
            @"TMXPATH file '/maps/level1.tmx' does not exist."
        );
        insta::assert_snapshot!(
            ResolveError::TooManyArguments { token: "third".to_string() },
            @"Too many arguments. Can't parse 'third'"
        );
    }
}
