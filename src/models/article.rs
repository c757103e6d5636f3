use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// An article as persisted in the `articles` table and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Article {
    /// System-assigned identity, immutable once created.
    pub id: i32,
    /// Human-readable title, always non-empty.
    pub title: String,
    /// Body text. Empty string when the article was created without content.
    #[serde(default)]
    pub content: String,
    /// Assigned once at insertion, never touched by updates.
    pub created_at: DateTime<Utc>,
}

/// The create/update request payload.
///
/// Both fields are optional at the wire level so that a missing title
/// surfaces as a 400 validation error rather than a deserialization
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A validated, normalized write. The only way to obtain one is
/// [`ArticleDraft::into_new`], which applies the boundary rules.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}

impl ArticleDraft {
    /// Normalize the payload at the boundary.
    ///
    /// A missing or empty title is rejected. Absent content collapses to
    /// the empty string; a provided string (including `""`) is stored as
    /// given.
    pub fn into_new(self) -> Result<NewArticle, AppError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(AppError::BadRequest("Title is required".into())),
        };

        Ok(NewArticle {
            title,
            content: self.content.unwrap_or_default(),
        })
    }
}

/// Client-side submit guard: blank titles never reach the network.
pub fn title_is_blank(title: &str) -> bool {
    title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_without_title_is_rejected() {
        let draft = ArticleDraft {
            title: None,
            content: Some("body".into()),
        };
        assert!(matches!(
            draft.into_new(),
            Err(AppError::BadRequest(msg)) if msg == "Title is required"
        ));
    }

    #[test]
    fn draft_with_empty_title_is_rejected() {
        let draft = ArticleDraft {
            title: Some(String::new()),
            content: None,
        };
        assert!(draft.into_new().is_err());
    }

    #[test]
    fn absent_content_collapses_to_empty_string() {
        let draft = ArticleDraft {
            title: Some("A".into()),
            content: None,
        };
        let new = draft.into_new().unwrap();
        assert_eq!(new.title, "A");
        assert_eq!(new.content, "");
    }

    #[test]
    fn provided_content_is_kept_verbatim() {
        let draft = ArticleDraft {
            title: Some("A".into()),
            content: Some("  spaced  ".into()),
        };
        assert_eq!(draft.into_new().unwrap().content, "  spaced  ");
    }

    #[test]
    fn blank_title_guard_blocks_whitespace() {
        assert!(title_is_blank(""));
        assert!(title_is_blank("   \t\n"));
        assert!(!title_is_blank("Hello"));
        assert!(!title_is_blank("  padded  "));
    }
}
