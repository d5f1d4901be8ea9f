use crate::{api::BlogApi, blog::Blog, config::Config};
use axum::{
    Router,
    extract::{Path, State},
    response::Html,
    routing::get,
    serve,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use tower_http::cors::CorsLayer;

struct AppState {
    api_base_url: String,
}

pub async fn run_ws(config: Config) -> Result<(), anyhow::Error> {
    let state = Arc::new(AppState {
        api_base_url: config.api_base_url,
    });
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/posts/{id}", get(post_handler))
        .layer(tower::ServiceBuilder::new().layer(CorsLayer::very_permissive()))
        .with_state(state)
        .into_make_service();

    let listener = if let Some(addr) = config.webserver_address {
        TcpListener::bind(addr).await?
    } else {
        TcpListener::bind(format!("0.0.0.0:{}", config.webserver_port.unwrap())).await?
    };

    tracing::info!("listening on {}", listener.local_addr()?);
    serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut blog = Blog::new(BlogApi::new(&state.api_base_url));
    blog.load_posts().await;

    Html(blog.page.render())
}

async fn post_handler(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Html<String> {
    let mut blog = Blog::new(BlogApi::new(&state.api_base_url));
    blog.load_posts().await;
    blog.open_post(id).await;

    for alert in blog.page.alerts() {
        tracing::warn!("post {id}: {alert}");
    }

    Html(blog.page.render())
}
