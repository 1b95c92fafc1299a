use std::io;

use anyhow::Result;
use tracing::info;

use workforce::config::Config;
use workforce::logging::init_logging;
use workforce::model::PositionCatalog;
use workforce::registry::Registry;
use workforce::shell::Shell;

fn main() -> Result<()> {
    let config = Config::from_env();

    let _guard = init_logging(&config)?;

    info!(data_dir = %config.data_dir.display(), "Workforce starting...");

    let registry = Registry::new(PositionCatalog::standard());
    let stdin = io::stdin();
    let mut shell = Shell::new(registry, config.data_dir.clone(), stdin.lock(), io::stdout());

    shell.run()
}
