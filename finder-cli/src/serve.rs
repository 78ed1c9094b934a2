use crate::cli::{FindArgs, ServeArgs};
use crate::config::ModelCredentials;
use anyhow::{Context, Result};
use finder_agent::RestaurantAgent;
use finder_server::{ServerConfig, create_app};
use finder_tool::{LoadPolicy, RestaurantFinder};
use std::sync::Arc;

fn build_finder(data_dir: &std::path::Path, cache_records: bool) -> RestaurantFinder {
    let policy =
        if cache_records { LoadPolicy::CacheFirstLoad } else { LoadPolicy::ReloadEachCall };
    RestaurantFinder::new(data_dir).with_load_policy(policy)
}

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let credentials = ModelCredentials::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "missing model credentials");
    })?;
    tracing::info!(platform = credentials.platform(), "model credentials found");

    let finder = build_finder(&args.data_dir, args.cache_records);
    tracing::info!(
        data_dir = %finder.data_dir().display(),
        policy = ?finder.load_policy(),
        "restaurant data configured"
    );

    let agent = Arc::new(RestaurantAgent::new(Arc::new(finder)));
    let base_url = format!("http://{}:{}", args.host, args.port);

    let config = ServerConfig::new(agent)
        .with_static_dir(&args.static_dir)
        .with_allowed_origins(args.allowed_origins)
        .with_task_capacity(args.task_capacity);
    let app = create_app(config, &base_url);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", args.host, args.port))?;

    tracing::info!(url = %base_url, "restaurant agent listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server stopped");
    Ok(())
}

pub fn run_find(args: FindArgs) -> Result<()> {
    let finder = build_finder(&args.data_dir, false);
    println!("{}", finder.get_restaurants(&args.cuisine, &args.location, args.count));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
