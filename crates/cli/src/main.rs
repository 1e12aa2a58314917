//! Juice Bar CLI - schema export and seed data inspection.
//!
//! # Usage
//!
//! ```bash
//! # Print the GraphQL schema (SDL)
//! jb-cli schema
//!
//! # Write the schema to a file
//! jb-cli schema --output schema.graphql
//!
//! # Print the seed catalog and orders as JSON
//! jb-cli seed
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "jb-cli")]
#[command(author, version, about = "Juice Bar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the GraphQL schema in SDL form
    Schema {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the data the server starts with
    Seed {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Logs go to stderr so stdout stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Schema { output } => {
            commands::emit(&commands::schema::sdl(), output.as_deref())?;
        }
        Commands::Seed { output } => {
            commands::emit(&commands::seed::to_json()?, output.as_deref())?;
        }
    }
    Ok(())
}
