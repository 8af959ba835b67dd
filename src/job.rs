//! The resolved export job and its hand-off to a conversion engine.

use std::path::PathBuf;

use crate::diagnostics::Broadcaster;
use crate::error::Result;

/// Vertex scale used when neither the command line nor the saved settings
/// provide a positive value.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default inverse texel offset.
pub const DEFAULT_TEXEL_BIAS: f32 = 8192.0;

/// Everything one export run needs.
///
/// Produced by the resolver; the conversion engine reads it and nothing
/// else.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfiguration {
    /// Export non-interactively and exit afterwards.
    pub auto_export: bool,
    /// Vertex scale multiplier, always positive once resolved.
    pub scale: f32,
    /// Texels are offset by `1 / texel_bias`.
    pub texel_bias: f32,
    pub verbose: bool,
    pub help: bool,
    /// Absolute path to the source TMX file.
    pub tmx_path: PathBuf,
    /// Absolute path to the target Unity project, if one was given.
    pub export_dir: Option<PathBuf>,
}

impl Default for ExportConfiguration {
    fn default() -> Self {
        Self {
            auto_export: false,
            scale: DEFAULT_SCALE,
            texel_bias: DEFAULT_TEXEL_BIAS,
            verbose: false,
            help: false,
            tmx_path: PathBuf::new(),
            export_dir: None,
        }
    }
}

/// Name of the file the engine writes for a map.
pub fn exported_filename(map_name: &str) -> String {
    format!("{}.tiled2unity.xml", map_name)
}

/// The map-parsing and conversion engine.
pub trait ExportEngine {
    fn export(&mut self, job: &ExportConfiguration, log: &mut Broadcaster) -> Result<()>;
}

/// What the host should do once an export has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Keep running (interactive use).
    Continue,
    /// Auto-export finished; the host process should exit.
    Terminate,
}

/// Run a resolved job through `engine`.
pub fn dispatch(
    job: &ExportConfiguration,
    engine: &mut dyn ExportEngine,
    log: &mut Broadcaster,
) -> Result<Completion> {
    log.verbose(format!(
        "Exporting '{}' (scale {}, texel bias {})",
        job.tmx_path.display(),
        job.scale,
        job.texel_bias
    ))?;

    engine.export(job, log)?;

    if job.auto_export {
        Ok(Completion::Terminate)
    } else {
        Ok(Completion::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct RecordingEngine {
        jobs: Vec<ExportConfiguration>,
        fail: bool,
    }

    impl ExportEngine for RecordingEngine {
        fn export(&mut self, job: &ExportConfiguration, log: &mut Broadcaster) -> Result<()> {
            if self.fail {
                return Err(Error::Usage {
                    message: "engine refused".to_string(),
                });
            }
            self.jobs.push(job.clone());
            log.success("Exported")
        }
    }

    fn job() -> ExportConfiguration {
        ExportConfiguration {
            tmx_path: PathBuf::from("/maps/level1.tmx"),
            export_dir: Some(PathBuf::from("/projects/game")),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = ExportConfiguration::default();
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.texel_bias, 8192.0);
        assert!(!config.auto_export);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_exported_filename() {
        assert_eq!(exported_filename("level1"), "level1.tiled2unity.xml");
    }

    #[test]
    fn test_dispatch_interactive_continues() {
        let mut engine = RecordingEngine::default();
        let mut log = Broadcaster::silent();

        let completion = dispatch(&job(), &mut engine, &mut log).unwrap();

        assert_eq!(completion, Completion::Continue);
        assert_eq!(engine.jobs, vec![job()]);
    }

    #[test]
    fn test_dispatch_auto_export_terminates() {
        let mut engine = RecordingEngine::default();
        let mut log = Broadcaster::silent();
        let job = ExportConfiguration {
            auto_export: true,
            ..job()
        };

        let completion = dispatch(&job, &mut engine, &mut log).unwrap();
        assert_eq!(completion, Completion::Terminate);
    }

    #[test]
    fn test_dispatch_propagates_engine_failure() {
        let mut engine = RecordingEngine {
            fail: true,
            ..Default::default()
        };
        let mut log = Broadcaster::silent();

        assert!(dispatch(&job(), &mut engine, &mut log).is_err());
    }
}
