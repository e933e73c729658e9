//! CLI interface for the job comparison tool

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "job-compare")]
#[command(about = "Compare job listings side by side with weighted match scores")]
#[command(long_about = "Score job listings on salary, growth, demand, work-life balance and accessibility, rank them, and pick a best match")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank jobs and pick a best match
    Compare {
        /// Path to the job list (JSON or TOML)
        #[arg(short, long)]
        jobs: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show per-dimension breakdowns
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show composite and badge scores for every job, unranked
    Score {
        /// Path to the job list (JSON or TOML)
        #[arg(short, long)]
        jobs: PathBuf,
    },

    /// Show the best match pick
    Best {
        /// Path to the job list (JSON or TOML)
        #[arg(short, long)]
        jobs: PathBuf,
    },

    /// Show the sector lookup tables in effect
    Sectors,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare_command() {
        let cli = Cli::try_parse_from([
            "job-compare", "--verbose", "compare", "--jobs", "jobs.json", "--output", "md", "--detailed",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Compare { jobs, output, detailed, no_color, .. } => {
                assert_eq!(jobs, PathBuf::from("jobs.json"));
                assert_eq!(output.as_deref(), Some("md"));
                assert!(detailed);
                assert!(!no_color);
            }
            _ => panic!("expected compare command"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("jobs.json"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("jobs.TOML"), &["json", "toml"]).is_ok());
        assert!(validate_file_extension(Path::new("jobs.csv"), &["json", "toml"]).is_err());
        assert!(validate_file_extension(Path::new("jobs"), &["json", "toml"]).is_err());
    }
}
