use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use bazar_client::args::Args;
use bazar_client::config::load_config_with_fallback;
use bazar_client::logging::init_dual_logging;
use bazar_client::session::Session;
use bazar_client::shell;

fn main() -> Result<()> {
    let args = Args::parse();

    if args.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    init_dual_logging(args.verbose);

    let (config, source) = load_config_with_fallback(&args.config)?;
    info!("Loaded configuration from {}", source.description());
    info!(
        "Catalog replicas: {}, order replicas: {}, request timeout: {}",
        config.catalog.len(),
        config.order.len(),
        Session::describe_timeout(&config)
    );
    for replica in &config.catalog {
        info!("  catalog - {}", replica.url);
    }
    for replica in &config.order {
        info!("  order   - {}", replica.url);
    }

    // Commands run one at a time, so a single-threaded runtime is enough
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    rt.block_on(async {
        let session = Session::new(&config)?;
        shell::run(&session).await
    })
}
