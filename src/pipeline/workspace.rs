use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempPath;

use crate::config::defaults::DEBUG_WORKING_FILENAME;
use crate::error::EnhanceError;

/// The private copy of the input that filters mutate.
///
/// A temporary working file is deleted when dropped unless it is kept.
pub struct WorkingFile {
    path: PathBuf,
    temp: Option<TempPath>,
}

impl WorkingFile {
    /// Copy `input` to a fresh temporary `.pdf` path
    pub fn stage(input: &Path) -> Result<Self, EnhanceError> {
        let temp = tempfile::Builder::new()
            .prefix("mohd-pdf-enhance-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|source| EnhanceError::Staging {
                path: std::env::temp_dir(),
                source,
            })?
            .into_temp_path();
        let path = temp.to_path_buf();
        copy_input(input, &path)?;
        Ok(Self {
            path,
            temp: Some(temp),
        })
    }

    /// Copy `input` to the fixed debug working file in `dir`.
    ///
    /// When `input` already is that file, a temporary working file is used
    /// instead so the input is never copied onto itself.
    pub fn stage_debug(input: &Path, dir: &Path) -> Result<Self, EnhanceError> {
        let path = dir.join(DEBUG_WORKING_FILENAME);
        if is_same_file(input, &path) {
            log::warn!(
                "{} is the debug working file, using a temporary file instead",
                input.display()
            );
            return Self::stage(input);
        }
        copy_input(input, &path)?;
        Ok(Self { path, temp: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keep the file on disk and return its path
    pub fn keep(self) -> Result<PathBuf, EnhanceError> {
        match self.temp {
            Some(temp) => temp.keep().map_err(|e| EnhanceError::Staging {
                path: self.path,
                source: e.error,
            }),
            None => Ok(self.path),
        }
    }

    /// Delete the file
    pub fn discard(self) -> Result<(), EnhanceError> {
        let result = match self.temp {
            Some(temp) => temp.close(),
            None => fs::remove_file(&self.path),
        };
        result.map_err(|source| EnhanceError::Staging {
            path: self.path,
            source,
        })
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_input(input: &Path, working: &Path) -> Result<(), EnhanceError> {
    log::debug!("Copying {} to {}", input.display(), working.display());
    fs::copy(input, working).map_err(|source| EnhanceError::Staging {
        path: working.to_path_buf(),
        source,
    })?;
    Ok(())
}
