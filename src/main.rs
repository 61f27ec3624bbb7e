//! outliner: query a numbered markdown outline from the command line.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use outliner::{config, render, DocumentIndex, OutlineError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "outliner")]
#[command(about = "Browse a numbered markdown outline", long_about = None)]
struct Args {
    /// Outline document to read (overrides the config file)
    #[arg(long, short = 's', value_name = "PATH", global = true)]
    source: Option<PathBuf>,

    /// Config file to load instead of ./outliner.toml
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every section with its subsections as JSON
    Sections,
    /// Print the flattened subsection list as JSON
    Subsections,
    /// Print one section as JSON
    Section {
        /// Section id, e.g. 2
        id: String,
    },
    /// Print one subsection as JSON
    Subsection {
        /// Subsection id, e.g. 2.1
        id: String,
    },
    /// Print the previous and next subsections as JSON
    Adjacent {
        /// Subsection id, e.g. 2.1
        id: String,
    },
    /// Print a table of contents
    Toc,
    /// Print a subsection as a readable page
    Show {
        /// Subsection id, e.g. 2.1
        id: String,
    },
}

/// Outcome of a command, mapped to an exit status.
#[derive(Debug)]
enum Failure {
    NotFound(String),
    Fault(OutlineError),
}

impl Failure {
    /// 2 for an unknown id, 1 for anything that stopped the command running.
    fn status(&self) -> u8 {
        match self {
            Self::NotFound(_) => 2,
            Self::Fault(_) => 1,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotFound(message) => message.clone(),
            Self::Fault(e) => e.to_string(),
        }
    }
}

impl From<OutlineError> for Failure {
    fn from(e: OutlineError) -> Self {
        Self::Fault(e)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let source = args
        .source
        .clone()
        .unwrap_or_else(|| Path::new(&cfg.source).to_path_buf());
    let index = DocumentIndex::new(source);

    match run(&index, &args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            if let Failure::Fault(e) = &failure {
                tracing::error!(source = %index.source().describe(), error = %e, "command failed");
            }
            eprintln!("{}", error_body(&failure.message()));
            ExitCode::from(failure.status())
        }
    }
}

fn run(index: &DocumentIndex, command: &Command) -> Result<(), Failure> {
    // Surface an unreadable source instead of answering from an empty tree.
    let sections = index.try_sections()?;

    match command {
        Command::Sections => print_json(&sections)?,
        Command::Subsections => print_json(&index.all_subsections())?,
        Command::Section { id } => {
            let section = index
                .section_by_id(id)
                .ok_or_else(|| Failure::NotFound(format!("Section with ID {id} not found")))?;
            print_json(section)?;
        }
        Command::Subsection { id } => {
            let subsection = index
                .subsection_by_id(id)
                .ok_or_else(|| subsection_not_found(id))?;
            print_json(subsection)?;
        }
        Command::Adjacent { id } => {
            if index.subsection_by_id(id).is_none() {
                return Err(subsection_not_found(id));
            }
            print_json(&index.adjacent(id))?;
        }
        Command::Toc => print!("{}", render::table_of_contents(sections)),
        Command::Show { id } => {
            let page = render::subsection_page(index, id).ok_or_else(|| subsection_not_found(id))?;
            print!("{page}");
        }
    }

    Ok(())
}

fn subsection_not_found(id: &str) -> Failure {
    Failure::NotFound(format!("Subsection with ID {id} not found"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), OutlineError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

fn error_body(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
