use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{display_chain, EnhanceError, OutputWriteError};

use super::workspace::WorkingFile;

/// Where the final document ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLocation {
    /// The original input path (overwritten, or untouched when nothing changed)
    Original,
    /// The working file was kept
    Working,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalOutput {
    pub path: PathBuf,
    pub location: OutputLocation,
}

/// Copies the working file over the original
pub type Promote = fn(&Path, &Path) -> io::Result<()>;

/// Default promotion: a plain `fs::copy`
pub fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(|_| ())
}

/// Decide where the result lands, using [`copy_file`] for promotion
pub fn finalize(
    working: WorkingFile,
    original: &Path,
    document_processed: bool,
    keep_temp: bool,
) -> Result<FinalOutput, EnhanceError> {
    finalize_with(working, original, document_processed, keep_temp, copy_file)
}

/// Decide where the result lands.
///
/// - nothing processed: the working file is deleted, the original is the output
/// - processed with `keep_temp`: the working file is kept and is the output
/// - processed: the working file is copied over the original with `copy`;
///   permission denied keeps the working file as the output instead
pub fn finalize_with<F>(
    working: WorkingFile,
    original: &Path,
    document_processed: bool,
    keep_temp: bool,
    copy: F,
) -> Result<FinalOutput, EnhanceError>
where
    F: FnOnce(&Path, &Path) -> io::Result<()>,
{
    if !document_processed {
        working.discard()?;
        return Ok(FinalOutput {
            path: original.to_path_buf(),
            location: OutputLocation::Original,
        });
    }

    if keep_temp {
        return Ok(FinalOutput {
            path: working.keep()?,
            location: OutputLocation::Working,
        });
    }

    match copy(working.path(), original) {
        Ok(()) => {
            working.discard()?;
            Ok(FinalOutput {
                path: original.to_path_buf(),
                location: OutputLocation::Original,
            })
        }
        Err(source) => {
            let error = OutputWriteError {
                working: working.path().to_path_buf(),
                original: original.to_path_buf(),
                source,
            };
            if !error.is_recoverable() {
                return Err(error.into());
            }
            warn!("{}; keeping the working file", display_chain(&error));
            Ok(FinalOutput {
                path: working.keep()?,
                location: OutputLocation::Working,
            })
        }
    }
}
