mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn create_without_title_is_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/articles")
        .json(&serde_json::json!({ "content": "orphan body" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Title is required");
}

#[tokio::test]
async fn create_with_empty_title_is_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/articles")
        .json(&serde_json::json!({ "title": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_without_title_is_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let article = env.create(&env.server(), "Valid", None).await;

    let response = server
        .put(&format!("/api/articles/{}", article.id))
        .json(&serde_json::json!({ "content": "no title" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    // The stored article is untouched
    let stored = env.repo.find_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Valid");
}

#[tokio::test]
async fn fetching_unknown_id_returns_404() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.get("/api/articles/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Article not found");
}

#[tokio::test]
async fn updating_unknown_id_returns_404() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .put("/api/articles/999999")
        .json(&serde_json::json!({ "title": "Ghost" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_unknown_id_returns_404() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.delete("/api/articles/999999").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
