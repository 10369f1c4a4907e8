//! Lexnet CLI - Command-line interface for Lexnet
//!
//! Loads a WordNet-style taxonomy and answers relatedness queries:
//! distances, shortest-ancestral-path synsets and outcasts.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::LexnetConfig;

#[derive(Parser)]
#[command(name = "lexnet")]
#[command(author = "Lexnet Contributors")]
#[command(version)]
#[command(about = "Semantic relatedness over a hypernym taxonomy", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    inputs: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the taxonomy files come from.
#[derive(Args)]
struct InputArgs {
    /// Config file (defaults to ./lexnet.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Synsets file, overriding the config
    #[arg(long, global = true)]
    synsets: Option<PathBuf>,

    /// Hypernyms file, overriding the config
    #[arg(long, global = true)]
    hypernyms: Option<PathBuf>,
}

impl InputArgs {
    fn resolve(&self) -> commands::Result<LexnetConfig> {
        Ok(LexnetConfig::resolve(
            self.config.as_deref(),
            self.synsets.clone(),
            self.hypernyms.clone(),
        )?)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default lexnet.json
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Load the taxonomy and show statistics
    Status {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Distance between two nouns
    Distance {
        /// First noun
        a: String,
        /// Second noun
        b: String,
    },

    /// Common ancestor of two nouns on a shortest ancestral path
    Ancestor {
        /// First noun
        a: String,
        /// Second noun
        b: String,

        /// Show every synset along the path
        #[arg(long)]
        path: bool,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Find the outcast of each noun list
    Outcast {
        /// Files of whitespace-separated nouns
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Raw SAP queries over a digraph file
    Sap {
        /// Digraph in edge-list format (V, E, then E pairs)
        digraph: PathBuf,

        /// Vertex pairs as v:w (reads whitespace-separated pairs from stdin when empty)
        pairs: Vec<String>,
    },

    /// Export a digraph file as Graphviz DOT
    Dot {
        /// Digraph in edge-list format (V, E, then E pairs)
        digraph: PathBuf,
    },

    /// List nouns or check whether a word is one
    Nouns {
        /// Maximum nouns to list
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Check a single word instead of listing
        #[arg(long)]
        check: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let inputs = cli.inputs;
    let result = match cli.command {
        Commands::Init { path } => commands::init(&path),
        Commands::Status { json } => inputs
            .resolve()
            .and_then(|config| commands::status(&config, json)),
        Commands::Distance { a, b } => inputs
            .resolve()
            .and_then(|config| commands::distance(&config, &a, &b)),
        Commands::Ancestor { a, b, path, json } => inputs
            .resolve()
            .and_then(|config| commands::ancestor(&config, &a, &b, path, json)),
        Commands::Outcast { files } => inputs
            .resolve()
            .and_then(|config| commands::outcast(&config, &files)),
        Commands::Sap { digraph, pairs } => commands::sap(&digraph, &pairs),
        Commands::Dot { digraph } => commands::dot(&digraph),
        Commands::Nouns { limit, check } => inputs
            .resolve()
            .and_then(|config| commands::nouns(&config, limit, check.as_deref())),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
