use crate::dtos::{BookListParams, InsertBookResponse, MessageResponse, UpdateBookResponse};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::UpdateOptions;
use service_core::error::AppError;

// A malformed identifier is a generic failure, not a client error: the id
// format is a storage-layer detail the HTTP surface does not validate.
fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("Malformed book id {}: {}", id, e)))
}

pub async fn upload_book(
    State(state): State<AppState>,
    Json(book): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .db
        .books()
        .insert_one(&book, None)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert book: {}", e);
            AppError::from(e)
        })?;

    tracing::info!(inserted_id = %result.inserted_id, "Book inserted");

    Ok((StatusCode::CREATED, Json(InsertBookResponse::from(result))))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let object_id = parse_object_id(&id)?;

    // Upsert is the documented contract: patching an id that does not exist
    // creates a new record holding exactly the submitted fields.
    let options = UpdateOptions::builder().upsert(true).build();
    let result = state
        .db
        .books()
        .update_one(doc! { "_id": object_id }, doc! { "$set": fields }, options)
        .await
        .map_err(|e| {
            tracing::error!(book_id = %id, "Failed to update book: {}", e);
            AppError::from(e)
        })?;

    Ok(Json(UpdateBookResponse::from(result)))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object_id = parse_object_id(&id)?;

    let result = state
        .db
        .books()
        .delete_one(doc! { "_id": object_id }, None)
        .await
        .map_err(|e| {
            tracing::error!(book_id = %id, "Failed to delete book: {}", e);
            AppError::from(e)
        })?;

    if result.deleted_count == 1 {
        Ok(Json(MessageResponse {
            message: "Book successfully deleted".to_string(),
        }))
    } else {
        Err(AppError::NotFound(anyhow::anyhow!("Book not found")))
    }
}

pub async fn all_books(
    State(state): State<AppState>,
    Query(params): Query<BookListParams>,
) -> Result<impl IntoResponse, AppError> {
    // An empty category parameter means no filter, same as omitting it
    let filter = match params.category.filter(|c| !c.is_empty()) {
        Some(category) => doc! { "category": category },
        None => doc! {},
    };

    let mut cursor = state
        .db
        .books()
        .find(filter, None)
        .await
        .map_err(AppError::from)?;

    // Materialized fully before responding; no pagination.
    let mut books = Vec::new();
    while let Some(book) = cursor.try_next().await.map_err(AppError::from)? {
        books.push(book);
    }

    Ok(Json(books))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object_id = parse_object_id(&id)?;

    let book = state
        .db
        .books()
        .find_one(doc! { "_id": object_id }, None)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Book not found")))?;

    Ok(Json(book))
}
