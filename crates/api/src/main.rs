use std::sync::Arc;

use anyhow::Context;

use stockroom_api::app::{self, AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set; using ./stockroom.db");
        "sqlite://stockroom.db?mode=rwc".to_string()
    });
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let services = Arc::new(
        AppServices::connect(&database_url)
            .await
            .with_context(|| format!("failed to open item store at {database_url}"))?,
    );
    let app = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
