// file: src/cli/args.rs
// version: 1.0.0
// guid: 85a5de82-1f50-4d20-b8b4-3f2b7914c1a5

//! Command line argument definitions

use crate::config::{ColorChoice, SourceFormat};
use crate::surface::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docker-reference")]
#[command(about = "Docker command reference for the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (defaults to <config dir>/docker-reference/config.toml)
    #[arg(long, global = true, env = "DOCKER_REFERENCE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the command reference
    Show {
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print commands matching a query
    Search {
        /// Text to look for in titles, descriptions, snippets and categories
        query: String,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List categories with their command counts
    Categories {
        #[arg(short, long, help = "Command data file (.yaml, .yml, .json, .toml)")]
        source: Option<String>,
    },

    /// Check that a command data file loads
    Validate {
        #[arg(short, long, help = "Command data file (.yaml, .yml, .json, .toml)")]
        source: String,
    },

    /// Write the bundled command table as a data file
    Export {
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: ExportFormat,

        #[arg(short, long, help = "Output file (stdout when omitted)")]
        output: Option<PathBuf>,
    },
}

/// Options shared by `show` and `search`
#[derive(Args, Clone, Debug, Default)]
pub struct DisplayArgs {
    #[arg(short, long, help = "Command data file (.yaml, .yml, .json, .toml)")]
    pub source: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    #[arg(short, long, help = "Only show commands in this category")]
    pub category: Option<String>,

    #[arg(short, long, help = "Group commands under category headers")]
    pub group: bool,

    #[arg(long, help = "Fail instead of printing a fallback message")]
    pub strict: bool,
}

/// Output format argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Text,
    Json,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

/// Color argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// Data file format for `export`
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ExportFormat {
    Yaml,
    Json,
    Toml,
}

impl From<ExportFormat> for SourceFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Yaml => SourceFormat::Yaml,
            ExportFormat::Json => SourceFormat::Json,
            ExportFormat::Toml => SourceFormat::Toml,
        }
    }
}
