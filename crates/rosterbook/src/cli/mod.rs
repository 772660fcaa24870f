//! Command-line interface for rosterbook.
//!
//! This module provides the CLI structure and command definitions for the
//! `roster` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, ListCommand, OutputFormat, RemoveCommand, SearchCommand,
    UpdateCommand,
};

/// roster - Keep a student roster at your fingertips
///
/// A local roster manager that stores student records in a durable JSON
/// snapshot and supports create, edit, delete, and keyword/year search.
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all students
    List(ListCommand),

    /// Add a new student
    Add(AddCommand),

    /// Edit an existing student
    Update(UpdateCommand),

    /// Delete a student
    Remove(RemoveCommand),

    /// Search students by keywords and graduation year
    Search(SearchCommand),

    /// List the distinct graduation years in the roster
    Years,

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "roster");
    }

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["roster", "-q", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli::try_parse_from(["roster", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli::try_parse_from(["roster", "-v", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli::try_parse_from(["roster", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["roster", "list"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "roster",
            "add",
            "--first-name",
            "Nella",
            "--last-name",
            "Quye",
            "--email",
            "nquye@example.com",
            "--grad-year",
            "2005",
        ])
        .unwrap();

        let Command::Add(cmd) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(cmd.first_name, "Nella");
        assert_eq!(cmd.grad_year, 2005);
        assert_eq!(cmd.image, "images/default.jpg");
    }

    #[test]
    fn test_parse_add_rejects_non_integer_year() {
        let result = Cli::try_parse_from([
            "roster",
            "add",
            "--first-name",
            "Nella",
            "--last-name",
            "Quye",
            "--email",
            "nquye@example.com",
            "--grad-year",
            "soon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_update() {
        let cli =
            Cli::try_parse_from(["roster", "update", "some-id", "--last-name", "Quye"]).unwrap();

        let Command::Update(cmd) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(cmd.id, "some-id");
        assert_eq!(cmd.last_name.as_deref(), Some("Quye"));
        assert!(cmd.first_name.is_none());
    }

    #[test]
    fn test_parse_remove() {
        let cli = Cli::try_parse_from(["roster", "remove", "some-id"]).unwrap();
        let Command::Remove(cmd) = cli.command else {
            panic!("expected remove command");
        };
        assert_eq!(cmd.id, "some-id");
    }

    #[test]
    fn test_parse_search_defaults() {
        let cli = Cli::try_parse_from(["roster", "search"]).unwrap();
        let Command::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.keywords, "");
        assert_eq!(cmd.year, "");
        assert!(cmd.format.is_none());
    }

    #[test]
    fn test_parse_search_with_keywords_and_year() {
        let cli = Cli::try_parse_from(["roster", "search", "greaves 2002", "--year", "2003"])
            .unwrap();
        let Command::Search(cmd) = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(cmd.keywords, "greaves 2002");
        assert_eq!(cmd.year, "2003");
    }

    #[test]
    fn test_parse_years() {
        let cli = Cli::try_parse_from(["roster", "years"]).unwrap();
        assert!(matches!(cli.command, Command::Years));
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["roster", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: false })
        ));
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["roster", "-c", "/custom/config.toml", "list"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_parse_format_flag() {
        let cli = Cli::try_parse_from(["roster", "list", "--format", "json"]).unwrap();
        let Command::List(cmd) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(cmd.format, Some(OutputFormat::Json));
    }
}
