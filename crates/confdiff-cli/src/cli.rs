use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use confdiff_format::OutputFormat;

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Compares two configuration files and shows a difference.",
    version,
)]
pub struct Cli {
    /// Path to the first configuration file
    pub first_file: PathBuf,

    /// Path to the second configuration file
    pub second_file: PathBuf,

    /// Set format of output
    #[arg(short, long, default_value = "stylish")]
    pub format: FormatArg,
}

/// The output style choice as exposed on the command line. Converted into
/// the format crate's [`OutputFormat`] before the core runs.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Stylish,
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Stylish => OutputFormat::Stylish,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positionals() {
        let cli = Cli::try_parse_from(["confdiff", "a.json", "b.json"]).unwrap();
        assert_eq!(cli.first_file, PathBuf::from("a.json"));
        assert_eq!(cli.second_file, PathBuf::from("b.json"));
    }

    #[test]
    fn format_defaults_to_stylish() {
        let cli = Cli::try_parse_from(["confdiff", "a.json", "b.json"]).unwrap();
        assert!(matches!(cli.format, FormatArg::Stylish));
    }

    #[test]
    fn parse_plain_format() {
        let cli = Cli::try_parse_from(["confdiff", "-f", "plain", "a.yml", "b.yml"]).unwrap();
        assert!(matches!(cli.format, FormatArg::Plain));
    }

    #[test]
    fn parse_json_format_long() {
        let cli =
            Cli::try_parse_from(["confdiff", "--format", "json", "a.json", "b.yaml"]).unwrap();
        assert!(matches!(cli.format, FormatArg::Json));
    }

    #[test]
    fn invalid_format_rejected() {
        assert!(Cli::try_parse_from(["confdiff", "-f", "table", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn missing_positionals_rejected() {
        assert!(Cli::try_parse_from(["confdiff", "a.json"]).is_err());
    }
}
