use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    custdir_observability::init();

    let app = custdir_api::app::build_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .context("failed to bind 0.0.0.0:3000")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
