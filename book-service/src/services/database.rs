use mongodb::{
    bson::{doc, Document},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Round-trips a ping through the admin database. Used both as the
    /// startup connection check and by the /health endpoint.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Books are schemaless: whatever JSON the client submits is stored
    /// verbatim, so the collection is typed as raw BSON documents.
    pub fn books(&self) -> Collection<Document> {
        self.db.collection("Books")
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
