use book_service::config::BookConfig;
use book_service::services::MongoDb;
use book_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub db: MongoDb,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        // Unique DB per test so tests can run concurrently
        let db_name = format!("book_test_{}", Uuid::new_v4());

        let mut config = BookConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, db }
    }

    /// Upload a book and return its storage-assigned id.
    pub async fn upload_book(&self, client: &reqwest::Client, book: serde_json::Value) -> String {
        let response = client
            .post(format!("{}/upload-book", self.address))
            .json(&book)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(reqwest::StatusCode::CREATED, response.status());

        let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
        body["inserted_id"]
            .as_str()
            .expect("inserted_id missing from insert response")
            .to_string()
    }

    /// Cleanup test resources (drop the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.database().drop(None).await;
    }
}
