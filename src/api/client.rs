//! Browser-side HTTP layer for the articles API.
//!
//! Thin wrappers over the five REST endpoints. Callers decide what to do
//! with failures; the UI logs and swallows them.

use crate::models::article::{Article, ArticleDraft};

/// Base URL of the API service, set at build time. Empty string means
/// same-origin relative requests.
pub fn api_base() -> &'static str {
    option_env!("GAZETTE_API_URL").unwrap_or("")
}

pub async fn fetch_articles() -> Result<Vec<Article>, String> {
    let response = reqwest::get(format!("{}/api/articles", api_base()))
        .await
        .map_err(|e| e.to_string())?;

    response
        .json::<Vec<Article>>()
        .await
        .map_err(|e| e.to_string())
}

pub async fn create_article(draft: ArticleDraft) -> Result<Article, String> {
    let response = reqwest::Client::new()
        .post(format!("{}/api/articles", api_base()))
        .json(&draft)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json::<Article>().await.map_err(|e| e.to_string())
}

pub async fn update_article(id: i32, draft: ArticleDraft) -> Result<Article, String> {
    let response = reqwest::Client::new()
        .put(format!("{}/api/articles/{id}", api_base()))
        .json(&draft)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    response.json::<Article>().await.map_err(|e| e.to_string())
}

pub async fn delete_article(id: i32) -> Result<(), String> {
    reqwest::Client::new()
        .delete(format!("{}/api/articles/{id}", api_base()))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}
