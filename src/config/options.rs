use std::path::PathBuf;

use crate::cli::Args;

use super::settings::Settings;

/// What the orchestrator needs to know about a single run
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// PDF file to process
    pub input: PathBuf,
    /// Settings file to load
    pub settings_path: PathBuf,
    /// Leave the result in the working file instead of the original
    pub keep_temp: bool,
    /// Use the fixed debug working file
    pub debug: bool,
}

impl RunOptions {
    pub fn new(input: impl Into<PathBuf>, settings_path: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            settings_path: settings_path.into(),
            keep_temp: false,
            debug: false,
        }
    }

    /// Create run options from CLI arguments, discovering the settings file
    /// when none was given
    pub fn from_args(args: &Args) -> Self {
        Self {
            input: args.filename.clone(),
            settings_path: args.settings.clone().unwrap_or_else(Settings::default_path),
            keep_temp: args.keep_temp(),
            debug: args.debug,
        }
    }

    pub fn keep_temp(mut self, keep_temp: bool) -> Self {
        self.keep_temp = keep_temp;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
