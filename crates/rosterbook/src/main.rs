//! `roster` - CLI for rosterbook
//!
//! This binary provides the command-line interface for managing the student
//! roster: listing, adding, editing, removing, and searching records.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use rosterbook::cli::{
    AddCommand, Cli, Command, ConfigCommand, ListCommand, OutputFormat, RemoveCommand,
    SearchCommand, UpdateCommand,
};
use rosterbook::{init_logging, search, Config, RosterStore, SearchQuery, StudentRecord};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Add(cmd) => handle_add(&config, &cmd),
        Command::Update(cmd) => handle_update(&config, &cmd),
        Command::Remove(cmd) => handle_remove(&config, &cmd),
        Command::Search(cmd) => handle_search(&config, &cmd),
        Command::Years => handle_years(&config),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_store(config: &Config) -> anyhow::Result<RosterStore> {
    let path = config.roster_path();
    RosterStore::open(&path).with_context(|| format!("opening roster at {}", path.display()))
}

fn resolve_format(requested: Option<OutputFormat>, config: &Config) -> OutputFormat {
    requested
        .or_else(|| OutputFormat::from_name(&config.display.default_format))
        .unwrap_or_default()
}

fn handle_list(config: &Config, cmd: &ListCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let view: Vec<&StudentRecord> = store.students().iter().collect();
    render_students(
        &view,
        resolve_format(cmd.format, config),
        config.display.show_images,
    )
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let record = cmd.to_record();
    let id = record.id.clone();
    let name = record.full_name();
    store.add(record)?;
    println!("Added {name} ({id})");
    Ok(())
}

fn handle_update(config: &Config, cmd: &UpdateCommand) -> anyhow::Result<()> {
    let patch = cmd.to_patch();
    if patch.is_empty() {
        println!("Nothing to change; pass at least one field flag.");
        return Ok(());
    }

    let mut store = open_store(config)?;
    if store.update(&patch)? {
        println!("Updated {}", cmd.id);
    } else {
        println!("No student with id {}; nothing changed.", cmd.id);
    }
    Ok(())
}

fn handle_remove(config: &Config, cmd: &RemoveCommand) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    if store.remove(&cmd.id)? {
        println!("Removed {}", cmd.id);
    } else {
        println!("No student with id {}; nothing changed.", cmd.id);
    }
    Ok(())
}

fn handle_search(config: &Config, cmd: &SearchCommand) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let query = SearchQuery::new(&cmd.keywords, &cmd.year);
    let view = search(store.students(), &query);
    render_students(
        &view,
        resolve_format(cmd.format, config),
        config.display.show_images,
    )
}

fn handle_years(config: &Config) -> anyhow::Result<()> {
    let store = open_store(config)?;
    for year in store.grad_years() {
        println!("{year}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Roster path:    {}", config.roster_path().display());
                println!();
                println!("[Display]");
                println!("  Default format: {}", config.display.default_format);
                println!("  Show images:    {}", config.display.show_images);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn render_students(
    students: &[&StudentRecord],
    format: OutputFormat,
    show_images: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(students)?);
        }
        OutputFormat::Plain => {
            if students.is_empty() {
                println!("No students found.");
                return Ok(());
            }
            for student in students {
                println!(
                    "{}  {} <{}>  {}",
                    student.id,
                    student.full_name(),
                    student.email,
                    student.grad_year
                );
            }
        }
        OutputFormat::Table => render_table(students, show_images),
    }
    Ok(())
}

fn render_table(students: &[&StudentRecord], show_images: bool) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let mut name_width = "NAME".len();
    let mut email_width = "EMAIL".len();
    for student in students {
        name_width = name_width.max(student.full_name().len());
        email_width = email_width.max(student.email.len());
    }

    print!(
        "{:<name_width$}  {:<email_width$}  YEAR  {:<36}",
        "NAME", "EMAIL", "ID"
    );
    if show_images {
        print!("  IMAGE");
    }
    println!();

    for student in students {
        print!(
            "{:<name_width$}  {:<email_width$}  {:>4}  {:<36}",
            student.full_name(),
            student.email,
            student.grad_year,
            student.id
        );
        if show_images {
            print!("  {}", student.image);
        }
        println!();
    }

    println!();
    println!("{} student(s)", students.len());
}
