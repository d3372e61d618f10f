use anyhow::Context;

use worldcup_api::{
    config::Config, db, handlers, observability, server::Server, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    observability::init_tracing(&config)?;

    let pool = db::create_pool(&config.database)
        .await
        .context("opening dataset")?;
    let app = handlers::router(AppState::new(pool));

    Server::new(config).serve(app).await?;

    Ok(())
}
