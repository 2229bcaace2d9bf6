use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use mohd_pdf_enhance::cli::Args;
use mohd_pdf_enhance::{EnhanceError, Orchestrator, RunOptions, RunReport};

fn main() {
    let args = Args::parse();

    // Initialize logging
    let pid = process::id();
    env_logger::Builder::new()
        .filter_level(args.logging.level_filter())
        .format(move |buf, record| {
            let timestamp = buf.timestamp();
            writeln!(buf, "{}", log_line(&timestamp, record, pid))
        })
        .init();
    log::debug!("Logging level set to: {:?}", args.logging);

    let options = RunOptions::from_args(&args);
    require_file(&options.settings_path, "Settings file");
    require_file(&options.input, "PDF file");

    let code = match run(options) {
        Ok(report) => {
            log::debug!(
                "Document processed: {}, output: {}",
                report.document_processed,
                report.output.path.display()
            );
            0
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            err.downcast_ref::<EnhanceError>()
                .map_or(1, EnhanceError::exit_code)
        }
    };

    log::logger().flush();
    process::exit(code);
}

fn run(options: RunOptions) -> Result<RunReport> {
    let input = options.input.clone();
    Orchestrator::new(options)
        .run()
        .with_context(|| format!("Failed to process {}", input.display()))
}

/// Exit with a usage error when `path` does not exist
fn require_file(path: &Path, what: &str) {
    if !path.exists() {
        Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!("{} \"{}\" does not exist", what, path.display()),
            )
            .exit();
    }
}

/// One log line: timestamp, level, source location, module, pid and message
fn log_line(timestamp: &dyn Display, record: &log::Record, pid: u32) -> String {
    format!(
        "{} {:<8} {:<25} line: {:<5} {:<30} pid: {:<9} {}",
        timestamp,
        record.level(),
        record.file().unwrap_or("-"),
        record.line().unwrap_or(0),
        record.module_path().unwrap_or("-"),
        pid,
        record.args()
    )
}
