mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use crate::{
    config::Config,
    doc::ApiDoc,
    routes::{advisor, auth, health, rating, root, student},
    state::AppState,
    utils::shutdown::shutdown_signal,
};
use database::{SeaOrmStore, db::create_connection};
use log::info;
use std::{error::Error, sync::Arc};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    let state = AppState {
        store: Arc::new(SeaOrmStore::new(db)),
    };

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(config.oidc_issuer_url.as_str())
        .build()
        .await
        .map_err(|err| format!("Failed to build OAuth2ResourceServer: {err:?}"))?;

    let protected = OpenApiRouter::new()
        .routes(routes!(auth::me))
        .routes(routes!(student::get_profile))
        .routes(routes!(advisor::get_dashboard))
        .routes(routes!(rating::post_rating, rating::get_rating_summary))
        .routes(routes!(rating::get_my_rating))
        .layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));

    let public = OpenApiRouter::new()
        .routes(routes!(root::root))
        .routes(routes!(health::health));

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(protected)
        .merge(public)
        .split_for_parts();

    let app = router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
