use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;

use super::defaults::{FILENAME_PLACEHOLDER, SETTINGS_FILENAME};

/// Settings document as stored on disk.
///
/// Every top-level key other than the known ones is the options object of
/// the filter with that identifier.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    modules: Vec<String>,
    #[serde(default)]
    launchers: BTreeMap<String, String>,
    #[serde(default, rename = "post-execute")]
    post_execute: Option<String>,
    #[serde(flatten)]
    filter_options: Map<String, Value>,
}

/// Runtime settings, loaded once per run
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Filter identifiers in execution order
    pub modules: Vec<String>,
    /// Named shell templates containing `{FILENAME}`
    pub launchers: BTreeMap<String, String>,
    /// Launcher selected for the post-execute step
    pub post_execute: Option<String>,
    filter_options: Map<String, Value>,
}

impl Settings {
    /// Load and validate a settings file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&content, path)?;
        log::debug!(
            "Loaded settings from {}: {} module(s), {} launcher(s)",
            path.display(),
            settings.modules.len(),
            settings.launchers.len()
        );
        Ok(settings)
    }

    /// Parse settings from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, Path::new(""))
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let parse_error = |source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        };
        let value: Value = serde_json::from_str(content).map_err(parse_error)?;
        if !value.is_object() {
            return Err(ConfigError::NotAnObject(path.to_path_buf()));
        }
        let file: SettingsFile = serde_json::from_value(value).map_err(parse_error)?;

        let settings = Self {
            modules: file.modules,
            launchers: file.launchers,
            post_execute: file.post_execute,
            filter_options: file.filter_options,
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref name) = self.post_execute {
            if !self.launchers.contains_key(name) {
                return Err(ConfigError::UnknownLauncher(name.clone()));
            }
        }
        Ok(())
    }

    /// Options object for a filter identifier (`{}` when absent)
    pub fn options_for(&self, identifier: &str) -> Value {
        self.filter_options
            .get(identifier)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// The selected launcher template, if any
    pub fn post_execute_template(&self) -> Option<&str> {
        self.post_execute
            .as_deref()
            .and_then(|name| self.launchers.get(name))
            .map(String::as_str)
    }

    /// Post-execute command with the output path substituted for `{FILENAME}`.
    /// Returns None when no command is configured or the template is empty.
    pub fn post_execute_command(&self, filename: &Path) -> Option<String> {
        self.post_execute_template()
            .filter(|template| !template.trim().is_empty())
            .map(|template| fill_template(template, &filename.to_string_lossy()))
    }

    /// Locate the default settings file.
    ///
    /// Looks for `settings.json` in the program directory first, then in its
    /// parent directory.
    pub fn default_path() -> PathBuf {
        let program_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::discover_in(&program_dir)
    }

    fn discover_in(program_dir: &Path) -> PathBuf {
        let candidate = program_dir.join(SETTINGS_FILENAME);
        if candidate.is_file() {
            return candidate;
        }
        match program_dir.parent() {
            Some(parent) => parent.join(SETTINGS_FILENAME),
            None => candidate,
        }
    }
}

/// Substitute `filename` for `{FILENAME}`; `{{` and `}}` stand for literal braces
fn fill_template(template: &str, filename: &str) -> String {
    let mut command = String::with_capacity(template.len() + filename.len());
    let mut rest = template;
    while let Some(index) = rest.find(&['{', '}'][..]) {
        command.push_str(&rest[..index]);
        let tail = &rest[index..];
        let consumed = if tail.starts_with(FILENAME_PLACEHOLDER) {
            command.push_str(filename);
            FILENAME_PLACEHOLDER.len()
        } else if tail.starts_with("{{") || tail.starts_with("}}") {
            command.push_str(&tail[..1]);
            2
        } else {
            command.push_str(&tail[..1]);
            1
        };
        rest = &tail[consumed..];
    }
    command.push_str(rest);
    command
}
