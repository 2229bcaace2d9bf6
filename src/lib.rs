pub mod cli;
pub mod config;
pub mod error;
pub mod filters;
pub mod pdf;
pub mod pipeline;

pub use config::{RunOptions, Settings};
pub use error::{ConfigError, EnhanceError, FilterError, OutputWriteError, PostExecuteError};
pub use filters::{Filter, FilterRegistry};
pub use pipeline::{Orchestrator, RunReport};

/// High-level API: run the configured filter chain over one PDF.
///
/// Loads the settings named in `options`, stages a working copy of the
/// input, applies every configured filter and places the result. Then it
/// runs the post-execute launcher, if one is selected.
///
/// # Example
///
/// ```no_run
/// use mohd_pdf_enhance::{enhance, RunOptions};
///
/// let options = RunOptions::new("waybill.pdf", "settings.json");
/// let report = enhance(options).unwrap();
///
/// if report.document_processed {
///     println!("Result written to {}", report.output.path.display());
/// }
/// ```
pub fn enhance(options: RunOptions) -> Result<RunReport, EnhanceError> {
    Orchestrator::new(options).run()
}
