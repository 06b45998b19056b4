use book_service::config::BookConfig;
use book_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("book-service", "info");

    let config = BookConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    // A failed connection or startup ping is fatal; the process exits with a
    // non-zero status instead of serving requests it cannot complete.
    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start book-service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
