use anyhow::Result;
use tracing_subscriber::EnvFilter;
use urlpresser::config::{Config, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    init_tracing(&config)?;
    config.print_summary();

    urlpresser::server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }

    Ok(())
}
