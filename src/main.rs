use std::path::Path;

use miette::Result;
use tiled2unity::cli::{self, VERSION_FILENAME};
use tiled2unity::{Broadcaster, FileSettings};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if cli::wants_version_file(&args) {
        cli::write_version_file(Path::new(VERSION_FILENAME))?;
        return Ok(());
    }

    let mut log = Broadcaster::new();
    log.initialize_log(&args)?;
    let mut settings = FileSettings::open_default()?;

    match cli::run(&args, &mut settings, &mut log) {
        Ok(_) => Ok(()),
        // Already reported through the log, with help.
        Err(e) if e.is_reported() => std::process::exit(1),
        Err(e) => Err(e.into()),
    }
}
