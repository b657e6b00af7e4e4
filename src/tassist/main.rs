use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tassist::commands::{help, Command};
use tassist::error::{Result, TassistError};
use tassist::model::manager::ModelManager;
use tassist::model::Model;
use tassist::parser::parse_command;
use tassist::person::Person;
use tassist::storage;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_path = resolve_data_path(&cli)?;
    let mut model = ModelManager::new(storage::load(&data_path)?);

    if let Some(line) = cli.command {
        run_line(&line, &mut model, &data_path);
        return Ok(());
    }

    println!(
        "{}",
        "Welcome to TAssist. Type 'help' to list commands.".dimmed()
    );
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if run_line(line, &mut model, &data_path) {
            break;
        }
    }
    Ok(())
}

/// Runs one input line to completion: parse, execute, print feedback, and
/// persist if person data changed. Parse and command failures are printed
/// and swallowed; the session stays usable. Returns whether to exit.
fn run_line(line: &str, model: &mut ModelManager, data_path: &Path) -> bool {
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(e) => {
            println!("{}", e.to_string().red());
            return false;
        }
    };

    let result = match command.execute(model) {
        Ok(result) => result,
        Err(e) => {
            println!("{}", e.to_string().red());
            return false;
        }
    };

    println!("{}", result.feedback().green());
    if matches!(command, Command::Find(_) | Command::List) {
        print_persons(&model.filtered_persons());
    }
    if result.is_show_help() {
        println!("{}", help::usage_overview());
    }

    if command.is_mutation() {
        if let Err(e) = storage::save(data_path, model.persons()) {
            println!("{}", e.to_string().red());
        }
    }

    result.is_exit()
}

fn print_persons(persons: &[Person]) {
    for (i, person) in persons.iter().enumerate() {
        println!("{} {}", format!("{}.", i + 1).yellow(), person);
    }
}

fn resolve_data_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.data {
        return Ok(path.clone());
    }
    let dirs = ProjectDirs::from("com", "tassist", "tassist")
        .ok_or_else(|| TassistError::Storage("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().join("tassist.json"))
}
