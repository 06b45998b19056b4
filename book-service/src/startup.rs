use crate::config::BookConfig;
use crate::handlers;
use crate::services::MongoDb;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: BookConfig,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    /// Connects to MongoDB and binds the listener before returning, so a
    /// built Application is ready to serve: no request can be routed ahead
    /// of the storage handle existing.
    pub async fn build(config: BookConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;
        db.health_check().await.map_err(|e| {
            tracing::error!("MongoDB startup ping failed: {}", e);
            e
        })?;
        tracing::info!("Pinged MongoDB successfully");

        let state = AppState {
            config: config.clone(),
            db,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/upload-book", post(handlers::upload_book))
            .route("/all-books", get(handlers::all_books))
            .route(
                "/book/:id",
                get(handlers::get_book)
                    .patch(handlers::update_book)
                    .delete(handlers::delete_book),
            )
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
