//! Rolodex CLI
//!
//! Command-line contact book.
//!
//! # Commands
//!
//! - `list` - Show the directory, optionally filtered and jumped to a letter
//! - `rail` - Show the alphabet rail with per-letter counts
//! - `add` - Add one contact
//! - `import` - Import contacts from an `.xlsx` workbook
//! - `export` - Export contacts to an `.xlsx` workbook

mod commands;

use clap::{Parser, Subcommand};
use rolodex_book::{BookConfig, ContactBook};
use rolodex_store::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Rolodex command-line contact book.
#[derive(Parser)]
#[command(name = "rolodex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the contact store directory
    #[arg(global = true, short, long)]
    data: Option<PathBuf>,

    /// Worksheet name used for exports
    #[arg(global = true, long)]
    sheet_name: Option<String>,

    /// Header label of the names column
    #[arg(global = true, long)]
    header: Option<String>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the directory
    List {
        /// Only show contacts whose name contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Start at this letter of the alphabet rail
        #[arg(short, long)]
        letter: Option<char>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show the alphabet rail with per-letter counts
    Rail {
        /// Only count contacts whose name contains this text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Add one contact
    Add {
        /// Display name of the contact
        name: String,
    },

    /// Import contacts from an .xlsx workbook
    Import {
        /// Workbook to read
        file: PathBuf,
    },

    /// Export contacts to an .xlsx workbook
    Export {
        /// Output file (defaults to contacts.xlsx in the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("Rolodex CLI v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let path = cli.data.ok_or("Store path required (--data <dir>)")?;
    let mut config = BookConfig::default();
    if let Some(sheet_name) = cli.sheet_name {
        config = config.sheet_name(sheet_name);
    }
    if let Some(header) = cli.header {
        config = config.header_label(header);
    }

    debug!(path = %path.display(), "opening contact store");
    let store = FileStore::open(&path)?;
    let book = ContactBook::with_xlsx(store, config)?;

    match cli.command {
        Commands::List {
            query,
            letter,
            format,
        } => commands::list::run(&book, query.as_deref(), letter, &format)?,
        Commands::Rail { query } => commands::rail::run(&book, query.as_deref())?,
        Commands::Add { name } => commands::add::run(&book, &name)?,
        Commands::Import { file } => commands::transfer::import(&book, &file)?,
        Commands::Export { out } => commands::transfer::export(&book, out.as_deref())?,
        Commands::Version => {}
    }

    Ok(())
}
