use std::env;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

mod model;
mod render;
mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = Router::new()
        .route("/", get(routes::index))
        .route("/leaderboard/{level_id}", get(routes::view_leaderboard))
        .route("/api/run-details/{run_id}", get(routes::api_run_details))
        .layer(cors);

    // Determine port from environment or use default
    let port = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()).unwrap_or(5000);
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Narrow Arrow leaderboard server running on http://{}", addr);
    axum::serve(listener, app).await.expect("Server failed");
}
