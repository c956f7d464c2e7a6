use anyhow::Context;
use gamma::domain::config::{AppConfig, LoggingConfig};
use gamma::kernel::config::load_config;
use gamma_logger::{LevelFilter, Logger};
use gamma_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: AppConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = init_logging(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}

fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;

    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level)
        .directives(cfg.directives.clone().unwrap_or_default());

    let logger = match &cfg.dir {
        Some(dir) => builder.file(dir).json(cfg.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
