use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use netlab::api::weather::{router, WeatherState};
use netlab::config::{FileConfig, WeatherServerConfig};
use netlab::domain::ports::ObservationSink;
use netlab::utils::validation::Validate;
use netlab::utils::{logger, monitor::SystemMonitor};
use netlab::MySqlObservationSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = WeatherServerConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_logger(config.verbose);
    }

    tracing::info!("Starting weather-server");
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

    let sink: Arc<dyn ObservationSink> = match &config.database_url {
        Some(url) => Arc::new(MySqlObservationSink::from_url(url)?),
        None => Arc::new(MySqlObservationSink::new(&config.database())),
    };

    let monitor = Arc::new(SystemMonitor::new(config.monitor));
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }
    Arc::clone(&monitor).spawn_reporter(Duration::from_secs(30));

    let state = WeatherState::new(sink, config.observation());
    tracing::info!(
        "weather routes: /, /insert_data (writes {} / {})",
        config.city,
        config.temp
    );

    netlab::server::serve(router(state), addr).await?;

    monitor.log_final_stats();
    Ok(())
}
