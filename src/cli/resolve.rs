//! Export job resolution.
//!
//! Turns raw invocation tokens into a complete [`ExportConfiguration`], or
//! fails with a [`ResolveError`] after reporting the violated precondition
//! and the help text through the broadcaster.
//!
//! Resolution order:
//!
//! 1. parse options, keeping unrecognized tokens in order,
//! 2. resolve the vertex scale (explicit > saved > 1.0),
//! 3. first leftover token is TMXPATH, which must be an existing file,
//! 4. second leftover token is UNITYDIR, which must be a Unity project;
//!    it is mandatory when auto-exporting,
//! 5. anything left over is an error.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::diagnostics::Broadcaster;
use crate::error::{Error, ResolveError, Result};
use crate::job::{ExportConfiguration, DEFAULT_SCALE};
use crate::settings::SettingsStore;

use super::help::print_help;
use super::options::{Options, ParsedOptions};

/// Subdirectory that marks a Unity project root.
pub const PROJECT_MARKER: &str = "Assets";

/// Resolves export jobs against the host filesystem and saved settings.
pub struct JobResolver<'a> {
    settings: &'a mut dyn SettingsStore,
    log: &'a mut Broadcaster,
    base_dir: PathBuf,
}

impl<'a> JobResolver<'a> {
    /// Resolver for relative paths against the current directory.
    pub fn new(settings: &'a mut dyn SettingsStore, log: &'a mut Broadcaster) -> Result<Self> {
        let base_dir = std::env::current_dir()?;
        Ok(Self::with_base_dir(settings, log, base_dir))
    }

    /// Resolver for relative paths against `base_dir`.
    pub fn with_base_dir(
        settings: &'a mut dyn SettingsStore,
        log: &'a mut Broadcaster,
        base_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            settings,
            log,
            base_dir: base_dir.into(),
        }
    }

    /// Resolve invocation tokens (without the program name) into a job.
    pub fn resolve(&mut self, args: &[String]) -> Result<ExportConfiguration> {
        let parsed = match Options::parse_tokens(args) {
            Ok(parsed) => parsed,
            Err(e) => {
                self.log.error(e.to_string())?;
                print_help(self.log)?;
                return Err(e);
            }
        };

        self.log.set_verbose(parsed.verbose);

        let scale = self.resolve_scale(parsed.scale)?;
        let mut config = ExportConfiguration {
            auto_export: parsed.auto_export,
            scale,
            texel_bias: parsed.texel_bias,
            verbose: parsed.verbose,
            help: parsed.help,
            ..Default::default()
        };

        if let Err(e) = self.resolve_paths(parsed, &mut config) {
            return self.fail(e);
        }

        self.log.verbose(format!("Vertex scale: {}", config.scale))?;
        self.log.verbose(format!("Texel bias: {}", config.texel_bias))?;
        self.log
            .verbose(format!("TMXPATH: {}", config.tmx_path.display()))?;
        if let Some(dir) = &config.export_dir {
            self.log.verbose(format!("UNITYDIR: {}", dir.display()))?;
        }

        if config.help {
            print_help(self.log)?;
        }

        Ok(config)
    }

    /// A positive explicit scale wins and is remembered. Anything else
    /// means "not overridden".
    fn resolve_scale(&mut self, explicit: Option<f32>) -> Result<f32> {
        match explicit {
            Some(scale) if scale > 0.0 => {
                self.settings.set_last_vertex_scale(scale)?;
                Ok(scale)
            }
            _ => Ok(self
                .settings
                .last_vertex_scale()
                .filter(|saved| *saved > 0.0 && saved.is_finite())
                .unwrap_or(DEFAULT_SCALE)),
        }
    }

    fn resolve_paths(
        &self,
        parsed: ParsedOptions,
        config: &mut ExportConfiguration,
    ) -> std::result::Result<(), ResolveError> {
        let mut leftovers: VecDeque<String> = parsed.leftovers.into();

        let tmx = leftovers.pop_front().ok_or(ResolveError::MissingInput)?;
        let tmx_path = self.absolute(&tmx);
        if !tmx_path.is_file() {
            return Err(ResolveError::InputNotFound { path: tmx_path });
        }
        config.tmx_path = tmx_path;

        match leftovers.pop_front() {
            Some(dir) => {
                let export_dir = self.absolute(&dir);
                if !export_dir.is_dir() {
                    return Err(ResolveError::OutputDirNotFound { path: export_dir });
                }
                if !export_dir.join(PROJECT_MARKER).is_dir() {
                    return Err(ResolveError::OutputDirInvalid { path: export_dir });
                }
                config.export_dir = Some(export_dir);
            }
            None if config.auto_export => return Err(ResolveError::OutputDirRequired),
            None => {}
        }

        match leftovers.pop_front() {
            Some(token) => Err(ResolveError::TooManyArguments { token }),
            None => Ok(()),
        }
    }

    /// Report a failed precondition, print help, and hand the error back.
    fn fail(&mut self, error: ResolveError) -> Result<ExportConfiguration> {
        self.log.error(error.to_string())?;
        if error == ResolveError::MissingInput {
            self.log.info("  If using the GUI, try opening a TMX file now")?;
            self.log
                .info("  If using the command line, provide a path to a TMX file")?;
            self.log
                .info("  If using from Tiled Map Editor, try adding %mapfile to the command")?;
        }
        print_help(self.log)?;
        Err(Error::Resolve(error))
    }

    fn absolute(&self, token: &str) -> PathBuf {
        let path = Path::new(token);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
