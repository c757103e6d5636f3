use async_trait::async_trait;

use crate::error::AppError;
use crate::models::article::{Article, NewArticle};

/// Repository trait for article operations.
///
/// This trait allows swapping the database layer for test doubles.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// List all articles, newest first.
    async fn list(&self) -> Result<Vec<Article>, AppError>;

    /// Find an article by its id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, AppError>;

    /// Insert a new article. The engine assigns id and created_at.
    async fn create(&self, article: NewArticle) -> Result<Article, AppError>;

    /// Replace title and content of an existing article, leaving id and
    /// created_at untouched. Returns `None` when the id does not exist.
    async fn update(&self, id: i32, article: NewArticle) -> Result<Option<Article>, AppError>;

    /// Delete an article. Returns whether a row was actually removed.
    async fn delete(&self, id: i32) -> Result<bool, AppError>;
}

/// Postgres implementation of the ArticleRepository.
///
/// This is only available when the `ssr` feature is enabled (i.e., server-side).
#[cfg(feature = "ssr")]
pub struct PgArticleRepository {
    pool: sqlx::PgPool,
}

#[cfg(feature = "ssr")]
impl PgArticleRepository {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Create the `articles` table if it does not exist yet.
    ///
    /// Called once at process start; safe to run against an already
    /// initialized database.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS articles (
                 id SERIAL PRIMARY KEY,
                 title VARCHAR(255) NOT NULL,
                 content TEXT,
                 created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
             )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn list(&self) -> Result<Vec<Article>, AppError> {
        // The contract is newest-first; id breaks ties between rows
        // inserted in the same timestamp tick.
        sqlx::query_as::<_, Article>(
            "SELECT id, title, COALESCE(content, '') AS content, created_at
             FROM articles ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Article>, AppError> {
        sqlx::query_as::<_, Article>(
            "SELECT id, title, COALESCE(content, '') AS content, created_at
             FROM articles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn create(&self, article: NewArticle) -> Result<Article, AppError> {
        sqlx::query_as::<_, Article>(
            "INSERT INTO articles (title, content) VALUES ($1, $2)
             RETURNING id, title, COALESCE(content, '') AS content, created_at",
        )
        .bind(&article.title)
        .bind(&article.content)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn update(&self, id: i32, article: NewArticle) -> Result<Option<Article>, AppError> {
        sqlx::query_as::<_, Article>(
            "UPDATE articles SET title = $1, content = $2 WHERE id = $3
             RETURNING id, title, COALESCE(content, '') AS content, created_at",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
