use course_api::{config::load_config, logger::init_logger, server::Server, store::Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_logger(config.log_level.as_deref().unwrap_or("info"));

    let store = if config.seed.unwrap_or(true) {
        Store::seeded()
    } else {
        Store::new()
    };

    let server = Server::new(config.server.address, config.server.port, store).await?;
    server.start().await?;

    Ok(())
}
