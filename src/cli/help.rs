//! Help text, rendered from the option schema.

use clap::CommandFactory;

use crate::diagnostics::Broadcaster;
use crate::error::Result;

use super::options::Options;

/// Program version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-object properties read from the TMX file.
const PREFAB_PROPERTIES: &[&str] = &[
    "unity:sortingLayerName",
    "unity:sortingOrder",
    "unity:layer",
    "unity:tag",
    "unity:scale",
    "unity:isTrigger",
    "unity:ignore",
    "unity:collisionOnly",
];

/// Width of the flag column in the options table.
const FLAG_WIDTH: usize = 24;

/// All help lines, without terminators.
pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        format!("Tiled2Unity Utility, Version: {}", VERSION),
        "Usage: tiled2unity [OPTIONS]+ TMXPATH [UNITYDIR]".to_string(),
        "Example: tiled2unity --verbose -s=0.01 MyTiledMap.tmx ../../MyUnityProjectFolder"
            .to_string(),
        String::new(),
        "Options:".to_string(),
    ];
    lines.extend(option_lines());
    lines.push(String::new());

    lines.push("Prefab object properties (set in TMX file for each layer/object)".to_string());
    lines.extend(PREFAB_PROPERTIES.iter().map(|p| format!("  {}", p)));
    lines.push(
        "  (Other properties are exported for custom scripting in your Unity project)".to_string(),
    );
    lines
}

/// One or more lines per option: flag column, then the description with
/// continuation lines indented under it.
fn option_lines() -> Vec<String> {
    let cmd = Options::command();
    let mut lines = Vec::new();

    for arg in cmd.get_arguments() {
        let mut flags = Vec::new();
        if let Some(short) = arg.get_short() {
            flags.push(format!("-{}", short));
        }
        if let Some(long) = arg.get_long() {
            flags.push(format!("--{}", long));
        }
        if flags.is_empty() {
            continue;
        }

        let mut column = flags.join(", ");
        if arg.get_action().takes_values() {
            column.push_str("=VALUE");
        }

        let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
        let mut description = help.lines();
        let first = description.next().unwrap_or("");
        lines.push(format!("  {:<FLAG_WIDTH$}{}", column, first));
        for rest in description {
            lines.push(format!("  {:<FLAG_WIDTH$}{}", "", rest));
        }
    }

    lines
}

/// Emit the help text through the broadcaster.
pub fn print_help(log: &mut Broadcaster) -> Result<()> {
    for line in help_lines() {
        log.info(line)?;
    }
    Ok(())
}
