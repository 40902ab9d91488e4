//! Community forum posts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{Insertable, Record};
use crate::Id;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ForumPost {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub id: Id,
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    pub title: String,
    pub content: String,
    /// Server-managed, starts at 0
    pub response_count: i32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for ForumPost {
    fn id(&self) -> Id {
        self.id
    }
}

/// Post creation payload. `responseCount` is not accepted from callers.
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewForumPost {
    #[cfg_attr(feature = "openapi", schema(value_type = i64))]
    pub user_id: Id,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Insertable for NewForumPost {
    type Record = ForumPost;

    fn into_record(self, id: Id, created_at: DateTime<Utc>) -> ForumPost {
        ForumPost {
            id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            response_count: 0,
            tags: self.tags,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_starts_without_responses() {
        let payload: NewForumPost = serde_json::from_str(
            r#"{"userId":1,"title":"Hello World!","content":"Testing","tags":["a","b"],"responseCount":9}"#,
        )
        .unwrap();

        let post = payload.into_record(1, Utc::now());
        assert_eq!(post.response_count, 0);
        assert_eq!(post.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_tags_default_to_empty() {
        let payload: NewForumPost =
            serde_json::from_str(r#"{"userId":1,"title":"t","content":"c"}"#).unwrap();

        assert!(payload.tags.is_empty());
    }

    #[test]
    fn test_blank_title_rejected() {
        let payload: NewForumPost =
            serde_json::from_str(r#"{"userId":1,"title":"","content":"c"}"#).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }
}
