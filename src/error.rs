use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Settings file and filter option problems
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings file {} must contain a JSON object", .0.display())]
    NotAnObject(PathBuf),

    #[error("Post-execute launcher \"{0}\" is not defined in launchers")]
    UnknownLauncher(String),

    #[error("Invalid options for {filter}: {message}")]
    InvalidOptions { filter: String, message: String },

    #[error("Invalid regular expression {key} for {filter}")]
    InvalidRegex {
        filter: String,
        key: &'static str,
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    pub fn invalid_options(filter: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidOptions {
            filter: filter.to_string(),
            message: message.into(),
        }
    }
}

/// Errors raised by a filter while processing a document
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("PDF error")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Overlay rendering error: {0}")]
    Render(String),
}

/// Copying the working file over the original failed
#[derive(Error, Debug)]
#[error("Cannot write {} over {}", working.display(), original.display())]
pub struct OutputWriteError {
    pub working: PathBuf,
    pub original: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl OutputWriteError {
    /// Permission problems are recovered by keeping the working file
    pub fn is_recoverable(&self) -> bool {
        self.source.kind() == std::io::ErrorKind::PermissionDenied
    }
}

/// The post-execute command could not run or reported a failure
#[derive(Error, Debug)]
pub enum PostExecuteError {
    #[error("Failed to launch \"{command}\"")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command \"{command}\" exited with {status}")]
    Failed { command: String, status: ExitStatus },
}

/// Run-level errors, each mapped to its own process exit code
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Configuration error")]
    Config(#[from] ConfigError),

    #[error("Unknown filter module: {0}")]
    UnknownFilter(String),

    #[error("Filter {filter} failed")]
    FilterExecution {
        filter: String,
        #[source]
        source: FilterError,
    },

    #[error("Cannot stage working file {}", path.display())]
    Staging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Output(#[from] OutputWriteError),
}

/// Render an error and its sources on one line, `outer: inner: root`
pub fn display_chain(error: &dyn std::error::Error) -> String {
    let mut line = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        line.push_str(": ");
        line.push_str(&cause.to_string());
        source = cause.source();
    }
    line
}

impl EnhanceError {
    pub fn exit_code(&self) -> i32 {
        match self {
            EnhanceError::Config(_) => 3,
            EnhanceError::UnknownFilter(_) => 4,
            EnhanceError::FilterExecution { .. } => 5,
            EnhanceError::Staging { .. } | EnhanceError::Output(_) => 6,
        }
    }
}
