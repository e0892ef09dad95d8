//! CLI frontend for Losbuch weighted random tables.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "lb",
    about = "Losbuch: weighted random tables that can draw from each other",
    version,
    propagate_version = true
)]
struct Cli {
    /// Table file to read and write
    #[arg(
        short,
        long,
        global = true,
        env = "LOSBUCH_STORE",
        default_value = "losbuch.json"
    )]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all tables
    List,

    /// Show a table's entries with their weights and odds
    Show {
        /// Table name (exact, case-sensitive)
        name: String,
    },

    /// Draw a result from a table, following references to other tables
    Draw {
        /// Table name to draw from
        name: String,

        /// Number of draws
        #[arg(
            short = 'n',
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        times: u32,

        /// RNG seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum tables visited per draw, including the first
        #[arg(
            long,
            default_value_t = lb_core::MAX_DEPTH,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        max_depth: usize,
    },

    /// Create a new table
    Create {
        /// Name of the new table
        name: String,

        /// Entry to add (repeatable); use LIST_REF:<table> to reference a table
        #[arg(short, long = "entry")]
        entries: Vec<String>,

        /// Read entries from a text file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Replace all entries of an existing table
    Edit {
        /// Table to edit
        name: String,

        /// Text file with one entry per line
        #[arg(short, long, conflicts_with = "json", required_unless_present = "json")]
        file: Option<PathBuf>,

        /// JSON file with an array of {"nome", "peso"} entries
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Delete a table and remove references to it from other tables
    Delete {
        /// Table to delete
        name: String,

        /// Confirm removal of references held by other tables
        #[arg(short, long)]
        yes: bool,
    },

    /// Merge tables from a JSON file ("-" reads stdin)
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Write all tables as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report references to tables that do not exist
    Check,

    /// Restore any starter tables that are missing
    Defaults,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let store = lb_store::Store::open(cli.store);

    let result = match cli.command {
        Commands::List => commands::list::run(&store),
        Commands::Show { name } => commands::show::run(&store, &name),
        Commands::Draw {
            name,
            times,
            seed,
            max_depth,
        } => commands::draw::run(&store, &name, times, seed, max_depth),
        Commands::Create {
            name,
            entries,
            file,
        } => commands::create::run(&store, &name, &entries, file.as_deref()),
        Commands::Edit { name, file, json } => {
            commands::edit::run(&store, &name, file.as_deref(), json.as_deref())
        }
        Commands::Delete { name, yes } => commands::delete::run(&store, &name, yes),
        Commands::Import { file } => commands::import::run(&store, &file),
        Commands::Export { output } => commands::export::run(&store, output.as_deref()),
        Commands::Check => commands::check::run(&store),
        Commands::Defaults => commands::defaults::run(&store),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `LOSBUCH_LOG` (default `warn`).
/// `LOSBUCH_LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOSBUCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match std::env::var("LOSBUCH_LOG_FORMAT").as_deref() {
        Ok("json") => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }
}
