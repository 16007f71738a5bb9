use axum::{
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use vacancy_backend::{
    config::{get_config, init_config},
    routes, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new(config);

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/vacantes", post(routes::vacancy::create_vacancy))
        .route("/api/vacantes/:id/faq", put(routes::vacancy::replace_faqs))
        .route(
            "/api/vacantes/:id/full",
            get(routes::vacancy::get_vacancy_knowledge),
        )
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
