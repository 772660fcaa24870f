//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::student::{StudentPatch, StudentRecord};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured display format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Given name
    #[arg(long)]
    pub first_name: String,

    /// Family name
    #[arg(long)]
    pub last_name: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Graduation year
    #[arg(long)]
    pub grad_year: i32,

    /// Image reference shown on the student card
    #[arg(long, default_value = "images/default.jpg")]
    pub image: String,
}

impl AddCommand {
    /// Build the record to append, assigning it a fresh id.
    #[must_use]
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord::new(
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.grad_year,
            self.image.clone(),
        )
    }
}

/// Update command arguments.
///
/// Only the flags given are changed; everything else is retained.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Id of the record to edit
    pub id: String,

    /// Replacement given name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Replacement family name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Replacement contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Replacement graduation year
    #[arg(long)]
    pub grad_year: Option<i32>,
}

impl UpdateCommand {
    /// Build the shallow-merge patch this command describes.
    #[must_use]
    pub fn to_patch(&self) -> StudentPatch {
        StudentPatch {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            grad_year: self.grad_year,
        }
    }
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Id of the record to delete
    pub id: String,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Free-text keywords matched against first and last names
    #[arg(default_value = "")]
    pub keywords: String,

    /// Graduation year filter (behaves as one more OR-matched keyword)
    #[arg(short, long, default_value = "")]
    pub year: String,

    /// Output format (defaults to the configured display format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Resolve a configured format name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "table" => Some(Self::Table),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
