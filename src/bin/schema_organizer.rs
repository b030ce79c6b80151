use clap::{Parser, Subcommand};
use log::{error, info};
use schema_organizer::{
    logging, OrganizedTables, OrganizerConfig, SchemaOrganizer, TableSchema, TableSchemaValidator,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Flatten nested table schemas into sub-tables
    Flatten {
        /// JSON file with one table schema or an array of them
        input: PathBuf,
    },
    /// Rebuild nested table schemas from flattened tables
    Rebuild {
        /// JSON file with one organized table or an array of them
        input: PathBuf,
        /// Skip backend validation of the rebuilt schema
        #[arg(long)]
        no_validate: bool,
    },
    /// Check that flattening then rebuilding reproduces each table
    RoundTrip {
        /// JSON file with one table schema or an array of them
        input: PathBuf,
    },
    /// Validate nested table schemas against the backend requirements
    Validate {
        /// JSON file with one table schema or an array of them
        input: PathBuf,
    },
}

/// Input files hold either a single table or a list of tables
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

fn read_input<T: DeserializeOwned>(path: &Path) -> Result<OneOrMany<T>, Box<dyn std::error::Error>> {
    info!("Reading {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_flatten(organizer: &SchemaOrganizer, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let organized = match read_input::<TableSchema>(input)? {
        OneOrMany::One(table) => OneOrMany::One(organizer.flatten(&table)?),
        OneOrMany::Many(tables) => OneOrMany::Many(organizer.flatten_all(&tables)?),
    };
    print_json(&organized)
}

fn handle_rebuild(
    organizer: &SchemaOrganizer,
    input: &Path,
    no_validate: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rebuild = |organized: &OrganizedTables| {
        if no_validate {
            organizer.rebuild(organized)
        } else {
            organizer.submit(organized)
        }
    };

    let tables = match read_input::<OrganizedTables>(input)? {
        OneOrMany::One(organized) => OneOrMany::One(rebuild(&organized)?),
        OneOrMany::Many(organized) => OneOrMany::Many(
            organized
                .iter()
                .map(rebuild)
                .collect::<schema_organizer::Result<Vec<_>>>()?,
        ),
    };
    print_json(&tables)
}

fn handle_round_trip(organizer: &SchemaOrganizer, input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let tables: Vec<TableSchema> = read_input(input)?.into_vec();
    let mut failures = 0;
    for table in &tables {
        match organizer.verify_round_trip(table) {
            Ok(()) => println!("ok: {}", table.table_name),
            Err(e) => {
                failures += 1;
                error!("{}", e);
                println!("FAILED: {}: {}", table.table_name, e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} tables failed the round trip", failures, tables.len()).into());
    }
    Ok(())
}

fn handle_validate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let tables: Vec<TableSchema> = read_input(input)?.into_vec();
    let validator = TableSchemaValidator::new();
    for table in &tables {
        validator.validate(table)?;
        println!("valid: {}", table.table_name);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => OrganizerConfig::from_file(path)?,
        None => OrganizerConfig::from_env()?,
    };
    logging::init(&config).ok();
    let organizer = SchemaOrganizer::new(config)?;

    match cli.command {
        Commands::Flatten { input } => handle_flatten(&organizer, &input),
        Commands::Rebuild { input, no_validate } => handle_rebuild(&organizer, &input, no_validate),
        Commands::RoundTrip { input } => handle_round_trip(&organizer, &input),
        Commands::Validate { input } => handle_validate(&input),
    }
}
