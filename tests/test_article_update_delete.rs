mod common;

use axum::http::StatusCode;
use gazette::models::article::Article;

#[tokio::test]
async fn update_replaces_title_and_content_only() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let created = env.create(&server, "Draft", Some("first pass")).await;

    let updated: Article = server
        .put(&format!("/api/articles/{}", created.id))
        .json(&serde_json::json!({
            "title": "Final",
            "content": "second pass"
        }))
        .await
        .json();

    assert_eq!(updated.id, created.id, "id is immutable");
    assert_eq!(
        updated.created_at, created.created_at,
        "created_at is assigned once and never touched by updates"
    );
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.content, "second pass");
}

#[tokio::test]
async fn update_without_content_resets_to_empty() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let created = env.create(&server, "Draft", Some("has a body")).await;

    let updated: Article = server
        .put(&format!("/api/articles/{}", created.id))
        .json(&serde_json::json!({ "title": "Draft" }))
        .await
        .json();

    assert_eq!(updated.content, "", "Absent content normalizes to empty");
}

#[tokio::test]
async fn delete_removes_the_article() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let created = env.create(&server, "Ephemeral", None).await;

    let response = server.delete(&format!("/api/articles/{}", created.id)).await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Article deleted successfully");

    // Gone from the API...
    let permissive = env.server_permissive();
    permissive
        .get(&format!("/api/articles/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    // ...and gone from storage. No tombstone, no soft delete.
    assert!(env.repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_twice_returns_404_the_second_time() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let created = env.create(&env.server(), "Once", None).await;

    server
        .delete(&format!("/api/articles/{}", created.id))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/api/articles/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
