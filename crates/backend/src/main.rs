pub mod api;
pub mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::extract::DefaultBodyLimit;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Simple request logging middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        let timestamp = chrono::Utc::now();
        tracing::info!(
            "{} | {:>5}ms | {} {:>6} {}",
            timestamp.format("%H:%M:%S"),
            duration.as_millis(),
            response.status().as_u16(),
            method,
            uri.path()
        );
        response
    }

    // Load configuration and prepare the uploads directory
    let config = shared::config::load_config()?;
    let uploads_dir = shared::config::resolve_uploads_dir(&config)?;
    std::fs::create_dir_all(&uploads_dir)?;

    api::handlers::storage::init_storage(api::handlers::storage::StorageRuntime {
        uploads_dir: uploads_dir.clone(),
        public_base: config.storage.public_base.clone(),
    })
    .map_err(|_| anyhow::anyhow!("storage runtime initialized twice"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // Product listing consumed by the admin SPA at page load
        .route("/api/products", get(api::handlers::products::list_all))
        // Object storage: raw bytes in, public URL out
        .route(
            "/api/storage/:folder/:name",
            post(api::handlers::storage::upload).delete(api::handlers::storage::delete),
        )
        // Uploaded assets and the built SPA
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new("dist"))
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Catalog backend listening on {addr}");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
