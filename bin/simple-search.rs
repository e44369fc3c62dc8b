use anyhow::Result;
use clap::Parser;
use simple_search::loader::load_records;
use simple_search::menu::Menu;
use simple_search::{
    build_index, NoneUniverse, QueryEngine, RecordStore, SearchConfig, Tokenizer,
};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "simple-search")]
#[command(about = "Search text records by ALL, ANY or NONE of the query words", long_about = None)]
struct Args {
    /// File with one record per line
    #[arg(long, env = "SIMPLE_SEARCH_DATA")]
    data: PathBuf,

    /// Records a NONE query can return (indexed, all-records)
    #[arg(long, env = "SIMPLE_SEARCH_NONE_UNIVERSE", default_value = "indexed")]
    none_universe: NoneUniverse,
}

fn main() -> Result<()> {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = SearchConfig::new(args.data).with_none_universe(args.none_universe);

    info!("Starting simple-search v{}", simple_search::VERSION);

    let records = match load_records(&config.data_path) {
        Ok(records) => records,
        Err(e) => {
            warn!("Could not read {:?}: {}", config.data_path, e);
            println!("File not found: {}", config.data_path.display());
            RecordStore::new()
        }
    };

    let tokenizer = Tokenizer::new(&config.tokenizer_config);
    let index = build_index(&records, &tokenizer);
    info!(
        "Indexed {} records, {} distinct terms",
        index.record_count(),
        index.term_count()
    );

    let engine = QueryEngine::with_config(&index, tokenizer, config.query_config.clone());
    let stdin = io::stdin();
    let mut menu = Menu::new(&records, &engine, stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
