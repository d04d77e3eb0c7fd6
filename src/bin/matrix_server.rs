use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use netlab::api::matrix::{router, MatrixState, ROUTES};
use netlab::config::{FileConfig, MatrixServerConfig};
use netlab::domain::model::MatrixPair;
use netlab::utils::validation::Validate;
use netlab::utils::{logger, monitor::SystemMonitor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = MatrixServerConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_logger(config.verbose);
    }

    tracing::info!("Starting matrix-server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Some(path) = config.config.clone() {
        let file = FileConfig::from_file(&path)?;
        config.merge_file(&file);
        tracing::info!("loaded configuration from {}", path.display());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let addr = config.bind_addr()?;

    let monitor = Arc::new(SystemMonitor::new(config.monitor));
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    Arc::clone(&monitor).spawn_reporter(Duration::from_secs(30));

    let state = MatrixState::new(MatrixPair::builtin());
    tracing::info!("matrix routes: {}", ROUTES.join(", "));

    netlab::server::serve(router(state), addr).await?;

    monitor.log_final_stats();
    Ok(())
}
