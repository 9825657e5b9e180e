use clap::Parser;
use tracing_subscriber::EnvFilter;

use pinshelf::cli;
use pinshelf::config::{Cli, Config};
use pinshelf::db::{self, Kv};
use pinshelf::store::AppStore;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let args = Cli::parse();
    let data_dir = Config::data_dir(&args);
    std::fs::create_dir_all(&data_dir)?;
    tracing::debug!("Data directory: {}", data_dir.display());

    let config = Config::load(&args)?;

    // Open the key-value backend and the state container
    let pool = db::create_pool(config.db_path())?;
    db::init_schema(&pool)?;
    let mut store = AppStore::open(Kv::new(pool))?;

    cli::run(&mut store, args.command)?;

    Ok(())
}
