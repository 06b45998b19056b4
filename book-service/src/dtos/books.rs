use mongodb::bson::Bson;
use mongodb::results::{InsertOneResult, UpdateResult};
use serde::{Deserialize, Serialize};

fn bson_id_to_string(id: &Bson) -> String {
    match id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => id.to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct InsertBookResponse {
    pub inserted_id: String,
}

impl From<InsertOneResult> for InsertBookResponse {
    fn from(result: InsertOneResult) -> Self {
        Self {
            inserted_id: bson_id_to_string(&result.inserted_id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateBookResponse {
    pub matched_count: u64,
    pub modified_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<String>,
}

impl From<UpdateResult> for UpdateBookResponse {
    fn from(result: UpdateResult) -> Self {
        Self {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
            upserted_id: result.upserted_id.as_ref().map(bson_id_to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct BookListParams {
    pub category: Option<String>,
}
