use std::{path::Path, sync::Arc};

use clap::Parser;
use ftsearch::{
    SearchEngine,
    cli::{Cli, Command, DocArgs, SearchArgs, StatsArgs},
    error::{Error, Result},
    output::{self, SearchReport},
    query,
    server,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("FTSEARCH_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let dump = cli.dump.as_deref().ok_or_else(|| {
        Error::Config("no dump given; pass --dump or set FTSEARCH_DUMP".into())
    })?;
    let engine = open_engine(dump)?;

    match cli.command {
        Command::Search(args) => cmd_search(&engine, &args)?,
        Command::Doc(args) => cmd_doc(&engine, &args)?,
        Command::Stats(args) => cmd_stats(&engine, &args)?,
        Command::Serve(args) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::serve(Arc::new(engine), args.addr))?;
        }
        Command::Completions(_) => {}
    }

    Ok(())
}

fn open_engine(dump: &Path) -> Result<SearchEngine> {
    if !dump.is_file() {
        return Err(Error::NotFound {
            kind: "dump",
            name: dump.display().to_string(),
        });
    }
    SearchEngine::open(dump)
}

fn cmd_search(engine: &SearchEngine, args: &SearchArgs) -> Result<()> {
    let outcome = query::execute(engine, &args.query)?;
    let report = SearchReport::new(&args.query, &outcome, args.limit());

    if args.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

fn cmd_doc(engine: &SearchEngine, args: &DocArgs) -> Result<()> {
    let doc = engine.document(args.id).ok_or_else(|| Error::NotFound {
        kind: "document",
        name: args.id.to_string(),
    })?;

    if args.json {
        println!("{}", serde_json::to_string(doc)?);
    } else {
        print!("{}", output::render_document(doc));
    }
    Ok(())
}

fn cmd_stats(engine: &SearchEngine, args: &StatsArgs) -> Result<()> {
    let stats = engine.stats();
    if args.json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        print!("{}", output::render_stats(&stats));
    }
    Ok(())
}
