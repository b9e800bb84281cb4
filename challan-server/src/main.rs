use challan_server::utils::logger;
use challan_server::{Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init_logger();

    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Starting challan server"
    );

    let state = ServerState::initialize(config).await?;
    Server::with_state(state).run().await
}
