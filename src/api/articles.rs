use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::models::article::{Article, ArticleDraft};
use crate::state::AppState;

/// Response from a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Axum handler for `GET /api/articles`.
///
/// Returns all articles, newest first.
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, AppError> {
    let articles = state.articles.list().await?;
    Ok(Json(articles))
}

/// Axum handler for `GET /api/articles/{id}`.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Article>, AppError> {
    let article = state
        .articles
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".into()))?;

    Ok(Json(article))
}

/// Axum handler for `POST /api/articles`.
///
/// Validates and normalizes the draft, then inserts it. The storage
/// engine assigns id and created_at.
pub async fn create_article(
    State(state): State<AppState>,
    Json(draft): Json<ArticleDraft>,
) -> Result<(StatusCode, Json<Article>), AppError> {
    let new = draft.into_new()?;
    let article = state.articles.create(new).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

/// Axum handler for `PUT /api/articles/{id}`.
///
/// Replaces title and content only; id and created_at are fixed.
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(draft): Json<ArticleDraft>,
) -> Result<Json<Article>, AppError> {
    let new = draft.into_new()?;
    let article = state
        .articles
        .update(id, new)
        .await?
        .ok_or_else(|| AppError::NotFound("Article not found".into()))?;

    Ok(Json(article))
}

/// Axum handler for `DELETE /api/articles/{id}`.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.articles.delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound("Article not found".into()));
    }

    Ok(Json(DeleteResponse {
        message: "Article deleted successfully".to_string(),
    }))
}
