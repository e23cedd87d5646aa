//! CLI command definitions and argument parsing.

use crate::config::{OutputFormat, ProviderKind};
use clap::{Parser, Subcommand};
use namecraft_extractor::TerminatorPolicy;
use std::path::PathBuf;

/// Namecraft CLI - Suggest product names and extract lists from LLM answers.
#[derive(Debug, Parser)]
#[command(name = "namecraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Markdown text (default)
    Text,
    /// JSON format
    Json,
}

/// Terminator handling options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PolicyArg {
    /// Drop terminator lines and keep scanning
    Skip,
    /// Stop at the first terminator line
    Stop,
}

/// LLM provider options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ProviderArg {
    /// Google Gemini API
    Gemini,
    /// Canned offline response
    Mock,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract header and list lines from generated text
    Extract(ExtractArgs),

    /// Ask an LLM for product names
    Suggest(SuggestArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Read text from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Terminator handling (overrides config)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Show list items grouped under their headers
    #[arg(long)]
    pub sections: bool,
}

/// Arguments for the suggest command.
#[derive(Debug, Parser)]
pub struct SuggestArgs {
    /// Product title to name
    pub title: String,

    /// LLM provider (overrides config)
    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model name (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Number of names to ask for
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Keyword the names should evoke (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Terminator handling (overrides config)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Arguments for the config command.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<PolicyArg> for TerminatorPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Skip => TerminatorPolicy::Skip,
            PolicyArg::Stop => TerminatorPolicy::Stop,
        }
    }
}

impl From<ProviderArg> for ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Gemini => ProviderKind::Gemini,
            ProviderArg::Mock => ProviderKind::Mock,
        }
    }
}
