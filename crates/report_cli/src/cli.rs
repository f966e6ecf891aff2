use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use report_export::ExportFormat;

/// Encode a report dataset (JSON) to a CSV or PDF file.
#[derive(Debug, Parser)]
#[command(name = "report-export", about, version)]
pub struct Cli {
    /// Path to the dataset JSON file
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Pdf)]
    pub format: FormatArg,

    /// Directory the artifact is written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,

    /// Export options JSON file
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Render rows whose cell count differs from the header count
    #[arg(long)]
    pub lenient: bool,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["report-export", "data.json"]).unwrap();
        assert_eq!(cli.dataset, PathBuf::from("data.json"));
        assert_eq!(cli.format, FormatArg::Pdf);
        assert_eq!(cli.out, PathBuf::from("."));
        assert!(cli.options.is_none());
        assert!(!cli.lenient);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "report-export",
            "data.json",
            "--format",
            "csv",
            "--out",
            "exports",
            "--options",
            "opts.json",
            "--lenient",
        ])
        .unwrap();
        assert_eq!(ExportFormat::from(cli.format), ExportFormat::Csv);
        assert_eq!(cli.out, PathBuf::from("exports"));
        assert_eq!(cli.options, Some(PathBuf::from("opts.json")));
        assert!(cli.lenient);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["report-export", "data.json", "--format", "xlsx"]).is_err());
    }
}
