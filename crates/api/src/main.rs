use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use dormnet_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    dormnet_observability::init(config.log_format);

    let services = dormnet_api::app::services::build_services(&config)
        .context("failed to build services")?;
    let app = dormnet_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
