//! Show an exported imageset in the host file browser.
//!
//! | Platform | Command |
//! |---|---|
//! | macOS | `open -R <folder>` |
//! | Windows | `explorer /select,<folder>` |
//! | other | `xdg-open <folder>` |
//!
//! `reveal.command` in config replaces the platform default; the folder is
//! passed as its single argument. Without a location there is nothing to
//! show and the call is a no-op.

use crate::config::RevealConfig;
use crate::types::LastExportLocation;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevealError {
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// No export has succeeded yet.
    Skipped,
    Launched,
}

/// Program and arguments that will be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCommand {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Other
        }
    }
}

/// Work out the command for `folder` without running it.
pub fn plan_reveal(folder: &Path, config: &RevealConfig, platform: Platform) -> RevealCommand {
    let folder = folder.to_string_lossy().into_owned();
    if let Some(program) = &config.command {
        return RevealCommand {
            program: program.clone(),
            args: vec![folder],
        };
    }
    match platform {
        Platform::MacOs => RevealCommand {
            program: "open".into(),
            args: vec!["-R".into(), folder],
        },
        Platform::Windows => RevealCommand {
            program: "explorer".into(),
            args: vec![format!("/select,{}", folder)],
        },
        Platform::Other => RevealCommand {
            program: "xdg-open".into(),
            args: vec![folder],
        },
    }
}

/// Ask the file browser to show the last exported imageset.
///
/// The browser is spawned and not waited on.
pub fn reveal(
    location: Option<&LastExportLocation>,
    config: &RevealConfig,
) -> Result<RevealOutcome, RevealError> {
    let Some(location) = location else {
        log::debug!("nothing exported yet, reveal skipped");
        return Ok(RevealOutcome::Skipped);
    };

    let plan = plan_reveal(location.path(), config, Platform::current());
    log::debug!("revealing with {} {:?}", plan.program, plan.args);
    Command::new(&plan.program)
        .args(&plan.args)
        .spawn()
        .map_err(|source| RevealError::Launch {
            program: plan.program.clone(),
            source,
        })?;
    Ok(RevealOutcome::Launched)
}
