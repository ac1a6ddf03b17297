//! propstore CLI
//!
//! Command-line interface for inspecting and editing a properties file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use propstore::{CommentMarker, Config, Separator, Store, StoreError};
use tracing_subscriber::{fmt, EnvFilter};

/// propstore CLI
#[derive(Parser, Debug)]
#[command(name = "propstore")]
#[command(about = "Read and edit .properties files without losing comments")]
#[command(version)]
struct Args {
    /// Properties file to operate on
    #[arg(short, long, default_value = "./config.properties")]
    file: PathBuf,

    /// Comment marker used when saving
    #[arg(long, value_enum, default_value = "hash")]
    marker: MarkerArg,

    /// Key/value separator used when saving
    #[arg(long, value_enum, default_value = "equals")]
    separator: SeparatorArg,

    /// Indent (in spaces) of continuation lines when saving
    #[arg(long, default_value = "2")]
    indent: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the file if it does not exist
    Create,

    /// Print the value of a key
    Get {
        /// The key to get
        key: String,
    },

    /// Set a key-value pair and save
    Set {
        /// The key to set
        key: String,

        /// The value to set
        value: String,

        /// Comment line to put above the key (repeatable)
        #[arg(short, long = "comment")]
        comments: Vec<String>,
    },

    /// Remove a key and save
    Remove {
        /// The key to remove
        key: String,
    },

    /// Print all entries in file order
    List,

    /// Rewrite the file in normalized form
    Fmt,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkerArg {
    Hash,
    Bang,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SeparatorArg {
    Equals,
    Colon,
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for values
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,propstore=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, StoreError> {
    let marker = match args.marker {
        MarkerArg::Hash => CommentMarker::Hash,
        MarkerArg::Bang => CommentMarker::Bang,
    };
    let separator = match args.separator {
        SeparatorArg::Equals => Separator::Equals,
        SeparatorArg::Colon => Separator::Colon,
    };

    let config = Config::builder()
        .path(args.file.clone())
        .comment_marker(marker)
        .separator(separator)
        .continuation_indent(args.indent)
        .create_if_missing(matches!(args.command, Commands::Set { .. }))
        .build();

    match args.command {
        Commands::Create => {
            let created = Store::with_config(config).create()?;
            if created {
                println!("created {}", args.file.display());
            } else {
                println!("{} already exists", args.file.display());
            }
        }
        Commands::Get { key } => {
            let store = Store::open(config)?;
            match store.get(&key) {
                Some(entry) => println!("{}", entry.value),
                None => {
                    tracing::warn!("key not found: {}", key);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Set {
            key,
            value,
            comments,
        } => {
            let mut store = Store::open(config)?;
            store.add_key_with_comments(key, value, comments);
            store.save()?;
        }
        Commands::Remove { key } => {
            let mut store = Store::open(config)?;
            if store.remove(&key).is_none() {
                tracing::warn!("key not found: {}", key);
                return Ok(ExitCode::FAILURE);
            }
            store.save()?;
        }
        Commands::List => {
            let store = Store::open(config)?;
            for entry in &store {
                println!("{}={}", entry.key, entry.value.replace('\n', "\\n"));
            }
        }
        Commands::Fmt => {
            let store = Store::open(config)?;
            store.save()?;
            tracing::info!("formatted {} entries", store.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}
