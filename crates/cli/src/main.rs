use std::process::ExitCode;

use clap::Parser;

use stockroom_cli::{Cli, Config, execute};
use stockroom_infra::JsonFileSlot;
use stockroom_inventory::InventoryStore;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(cli.data.clone(), cli.output);
    stockroom_observability::init(&config.log_filter);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    tracing::debug!(data_file = %config.data_file.display(), "using product file");

    let mut store = InventoryStore::new(JsonFileSlot::new(&config.data_file));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    execute(&mut store, cli.command, config.output, &mut out)
}
