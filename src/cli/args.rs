use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mohd-pdf-enhance")]
#[command(
    author,
    version,
    about = "Apply various fixes to PDF files before processing them"
)]
pub struct Args {
    /// PDF file to process
    #[arg(required = true)]
    pub filename: PathBuf,

    /// Settings file (defaults to settings.json next to the program)
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Save the result in a temporary file instead of the original
    #[arg(long)]
    pub temp: bool,

    /// Use ./temp.pdf as working file and keep it afterwards
    #[arg(long)]
    pub debug: bool,

    /// Logging level (case insensitive)
    #[arg(long, value_enum, ignore_case = true, default_value = "info")]
    pub logging: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum LogLevel {
    #[value(aliases = ["critical", "fatal"])]
    Error,
    #[value(alias = "warn")]
    Warning,
    #[default]
    Info,
    Debug,
    #[value(alias = "notset")]
    Trace,
}

impl LogLevel {
    pub fn level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Args {
    /// Check if the result must stay in the working file
    pub fn keep_temp(&self) -> bool {
        self.temp || self.debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let args = Args::try_parse_from(["mohd-pdf-enhance", "waybill.pdf"]).unwrap();
        assert_eq!(args.filename, PathBuf::from("waybill.pdf"));
        assert!(args.settings.is_none());
        assert!(!args.keep_temp());
        assert_eq!(args.logging, LogLevel::Info);
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "mohd-pdf-enhance",
            "--settings",
            "custom.json",
            "--temp",
            "--logging",
            "debug",
            "waybill.pdf",
        ])
        .unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("custom.json")));
        assert!(args.temp);
        assert!(args.keep_temp());
        assert_eq!(args.logging.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_debug_implies_keep_temp() {
        let args = Args::try_parse_from(["mohd-pdf-enhance", "--debug", "a.pdf"]).unwrap();
        assert!(!args.temp);
        assert!(args.keep_temp());
    }

    #[test]
    fn test_critical_alias() {
        let args =
            Args::try_parse_from(["mohd-pdf-enhance", "--logging", "critical", "a.pdf"]).unwrap();
        assert_eq!(args.logging, LogLevel::Error);
    }

    #[test]
    fn test_uppercase_level_names() {
        let parse = |level: &str| {
            Args::try_parse_from(["mohd-pdf-enhance", "--logging", level, "a.pdf"])
                .unwrap()
                .logging
        };
        assert_eq!(parse("DEBUG"), LogLevel::Debug);
        assert_eq!(parse("CRITICAL"), LogLevel::Error);
        assert_eq!(parse("FATAL"), LogLevel::Error);
        assert_eq!(parse("WARN"), LogLevel::Warning);
        assert_eq!(parse("WARNING"), LogLevel::Warning);
        assert_eq!(parse("INFO"), LogLevel::Info);
        assert_eq!(parse("NOTSET"), LogLevel::Trace);
    }

    #[test]
    fn test_unknown_level_rejected() {
        assert!(Args::try_parse_from(["mohd-pdf-enhance", "--logging", "LOUD", "a.pdf"]).is_err());
    }

    #[test]
    fn test_filename_required() {
        assert!(Args::try_parse_from(["mohd-pdf-enhance"]).is_err());
    }
}
