mod app;
mod cli;
mod codec;
mod config;
mod consts;
mod core;
mod error;
mod header;
mod output;
mod store;
mod utils;

use clap::Parser;

use app::CommandContext;
use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    let loaded = Config::load();
    let cli = Cli::parse().with_config(&loaded.config);

    init_logging(cli.debug);
    loaded.log();

    let result = CommandContext::new(&cli).and_then(|ctx| app::run(&ctx));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
