use std::net::SocketAddr;
use tracing::info;
use bookshop::core::controller::AppState;
use bookshop::core::domain::Configuration;
use bookshop::gateway::GatewayPublisherVia;
use bookshop::storefront::controller::build_router;
use bookshop::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    let addr: SocketAddr = config.bind_addr.parse()?;
    let state = AppState::new(config, GatewayPublisherVia::Logs);
    let app = build_router(state);

    info!(%addr, "storefront listening");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
