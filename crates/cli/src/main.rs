// AUFiles CLI - sync, search, and extend the record archive

mod add;
mod exit_codes;
mod list;
mod load;
mod parse;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

/// Structured CLI error: exit code plus user-facing message.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(message: impl Into<String>) -> Self {
        Self {
            code: EXIT_USAGE,
            message: message.into(),
            hint: None,
        }
    }
}

#[derive(Parser)]
#[command(name = "aufiles")]
#[command(about = "Record archive for the AUFiles directory — sync, search, extend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List merged records from the remote dump and the database
    #[command(after_help = "\
Examples:
  aufiles list
  aufiles list --query warmapex
  aufiles list --page 2 --page-size 100
  aufiles list --refresh --json > page.json")]
    List {
        /// Filter by substring of id, friend code, or PUID
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Page number (1-indexed)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Records per page (25, 50, 100, 200, or 500)
        #[arg(long, value_parser = parse_page_size)]
        page_size: Option<usize>,

        /// Bypass the cache and refetch the remote dump
        #[arg(long)]
        refresh: bool,

        /// Output the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a record to the database
    #[command(after_help = "\
Examples:
  aufiles add pichipuk 'pichipuk#0001' 00023bde5dd04f3ba92427d9e59359a1")]
    Add {
        /// Identifier (free-form, no character limit)
        id: String,

        /// Friend code (# followed by exactly 4 digits, e.g. warmapex#2446)
        friend_code: String,

        /// PUID (32 hexadecimal characters)
        puid: String,
    },

    /// One-shot import from a pre-filled link (id=…&fc=…&puid=…)
    #[command(after_help = "\
Examples:
  aufiles import 'https://example.com/add?id=pichipuk&fc=pichipuk%230001&puid=00023bde5dd04f3ba92427d9e59359a1'
  aufiles import 'id=pichipuk&fc=pichipuk%230001&puid=00023bde5dd04f3ba92427d9e59359a1'")]
    Import {
        /// Link or bare query string carrying id, fc, and puid
        link: String,
    },

    /// Parse a local dump file and print the records
    Parse {
        /// Path to the dump text file
        file: PathBuf,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Refetch the remote dump and rewrite the cache
    Refresh,
}

/// Accept only the sizes the archive page offers.
fn parse_page_size(raw: &str) -> Result<usize, String> {
    use aufiles_engine::PageSize;

    let size: usize = raw
        .parse()
        .map_err(|_| format!("invalid page size: {raw}"))?;
    PageSize::new(size)
        .map(PageSize::get)
        .ok_or_else(|| format!("page size must be one of {:?}", PageSize::CHOICES))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List {
            query,
            page,
            page_size,
            refresh,
            json,
        } => list::cmd_list(query, page, page_size, refresh, json),
        Commands::Add {
            id,
            friend_code,
            puid,
        } => add::cmd_add(&id, &friend_code, &puid),
        Commands::Import { link } => add::cmd_import(&link),
        Commands::Parse { file, json } => parse::cmd_parse(&file, json),
        Commands::Refresh => load::cmd_refresh(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}
