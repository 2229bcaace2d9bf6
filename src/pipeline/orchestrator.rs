//! Run orchestrator: settings → working copy → filter chain → final file →
//! post-execute command.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::{RunOptions, Settings};
use crate::error::{display_chain, EnhanceError, PostExecuteError};
use crate::filters::FilterRegistry;

use super::chain::FilterChain;
use super::finalize::{copy_file, finalize_with, FinalOutput, Promote};
use super::launcher::run_shell;
use super::workspace::WorkingFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    SettingsLoaded,
    Staged,
    Filtering,
    Finalizing,
    PostExecute,
    Done,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Init => "init",
            RunState::SettingsLoaded => "settings-loaded",
            RunState::Staged => "staged",
            RunState::Filtering => "filtering",
            RunState::Finalizing => "finalizing",
            RunState::PostExecute => "post-execute",
            RunState::Done => "done",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub enum PostExecuteOutcome {
    /// No launcher selected, or the selected template is empty
    Skipped,
    Completed { command: String },
    /// Logged as a warning; the run still succeeds
    Failed {
        command: String,
        error: PostExecuteError,
    },
}

impl PostExecuteOutcome {
    pub fn command(&self) -> Option<&str> {
        match self {
            PostExecuteOutcome::Skipped => None,
            PostExecuteOutcome::Completed { command }
            | PostExecuteOutcome::Failed { command, .. } => Some(command),
        }
    }
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct RunReport {
    /// True if any filter modified the document
    pub document_processed: bool,
    pub output: FinalOutput,
    pub post_execute: PostExecuteOutcome,
}

pub struct Orchestrator {
    options: RunOptions,
    registry: FilterRegistry,
    debug_dir: PathBuf,
    promote: Promote,
    state: RunState,
}

impl Orchestrator {
    pub fn new(options: RunOptions) -> Self {
        Self {
            options,
            registry: FilterRegistry::builtin(),
            debug_dir: PathBuf::from("."),
            promote: copy_file,
            state: RunState::Init,
        }
    }

    /// Use a custom filter registry
    pub fn with_registry(mut self, registry: FilterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Directory holding the debug working file (default: current directory)
    pub fn with_debug_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_dir = dir.into();
        self
    }

    /// Replace the copy used to write the result over the original
    pub fn with_promote(mut self, promote: Promote) -> Self {
        self.promote = promote;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    fn enter(&mut self, state: RunState) {
        debug!("Run state {} -> {}", self.state, state);
        self.state = state;
    }

    /// Execute the whole run
    pub fn run(&mut self) -> Result<RunReport, EnhanceError> {
        let settings = Settings::load(&self.options.settings_path)?;
        // Resolve filters before staging so a bad configuration leaves no files behind
        let mut chain = FilterChain::from_settings(&settings, &self.registry)?;
        self.enter(RunState::SettingsLoaded);

        let working = if self.options.debug {
            WorkingFile::stage_debug(&self.options.input, &self.debug_dir)?
        } else {
            WorkingFile::stage(&self.options.input)?
        };
        self.enter(RunState::Staged);

        self.enter(RunState::Filtering);
        let document_processed = chain.run(working.path())?;

        self.enter(RunState::Finalizing);
        let output = finalize_with(
            working,
            &self.options.input,
            document_processed,
            self.options.keep_temp,
            self.promote,
        )?;
        info!("Final document: {}", output.path.display());

        self.enter(RunState::PostExecute);
        let post_execute = post_execute(&settings, &output.path);

        self.enter(RunState::Done);
        debug!("Process ended");
        Ok(RunReport {
            document_processed,
            output,
            post_execute,
        })
    }
}

fn post_execute(settings: &Settings, filename: &Path) -> PostExecuteOutcome {
    let Some(command) = settings.post_execute_command(filename) else {
        warn!("No post-execute command was set");
        return PostExecuteOutcome::Skipped;
    };

    info!("Executing post-execute command: \"{}\"", command);
    match run_shell(&command) {
        Ok(_) => PostExecuteOutcome::Completed { command },
        Err(error) => {
            warn!("Post-execute failed: {}", display_chain(&error));
            PostExecuteOutcome::Failed { command, error }
        }
    }
}
