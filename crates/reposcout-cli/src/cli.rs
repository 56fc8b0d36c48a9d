// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for reposcout.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(reposcout completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      reposcout completion generate zsh > ~/.zsh/completions/_reposcout

  fish
    Generate completion file:
      reposcout completion generate fish > ~/.config/fish/completions/reposcout.fish
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown list of links
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, padding, summary line)
    pub quiet: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
    /// Show a spinner while loading (from `ui.progress_bars`)
    pub progress: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments and UI config.
    pub fn from_cli(format: OutputFormat, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            quiet,
            is_tty: std::io::stdout().is_terminal(),
            progress,
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// reposcout - find and open every GitHub repository your token can see.
///
/// Lists repositories you own, collaborate on, or can access through an
/// organization, and filters them by name.
#[derive(Parser)]
#[command(name = "reposcout")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, padding, summary line)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Do not ask the GitHub CLI (`gh auth token`) for a token
    #[arg(long, global = true)]
    pub no_gh: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List repositories, optionally filtered by name
    List {
        /// Case-insensitive substring to match against owner/name
        #[arg(default_value = "")]
        query: String,
    },

    /// Interactively search repositories and open them in the browser
    Browse,

    /// Open a repository in the browser by its owner/name
    Open {
        /// Repository full name (e.g., "octocat/Hello-World")
        name: String,
    },

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_query_defaults_to_empty() {
        let cli = Cli::parse_from(["reposcout", "list"]);
        match cli.command {
            Commands::List { query } => assert_eq!(query, ""),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["reposcout", "list", "Oct", "-o", "json", "--no-gh"]);
        assert!(matches!(cli.output, OutputFormat::Json));
        assert!(cli.no_gh);
        match cli.command {
            Commands::List { query } => assert_eq!(query, "Oct"),
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_structured_output_is_not_interactive() {
        let ctx = OutputContext {
            format: OutputFormat::Json,
            quiet: false,
            is_tty: true,
            progress: true,
        };
        assert!(!ctx.is_interactive());
    }
}
