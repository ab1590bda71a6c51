use std::{net::SocketAddr, path::PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "ftsearch",
    about = "Full-text search over a Wikipedia-style abstract dump"
)]
pub struct Cli {
    /// Path to the (optionally gzipped) XML dump to index at startup
    #[arg(long, global = true, env = "FTSEARCH_DUMP")]
    pub dump: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a single query against the dump
    Search(SearchArgs),
    /// Print one document by ID
    Doc(DocArgs),
    /// Show corpus and index statistics
    Stats(StatsArgs),
    /// Serve queries over HTTP
    Serve(ServeArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Keywords, a "quoted phrase", or a wildcard pattern like cat*
    pub query: String,

    /// Number of results to print
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Print every result
    #[arg(long)]
    pub all: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn limit(&self) -> Option<usize> {
        (!self.all).then_some(self.count)
    }
}

// -- Doc --

#[derive(Debug, Parser)]
pub struct DocArgs {
    /// Document ID (zero-based position in the dump)
    pub id: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Stats --

#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Serve --

#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FTSEARCH_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "ftsearch",
            &mut std::io::stdout(),
        );
    }
}
