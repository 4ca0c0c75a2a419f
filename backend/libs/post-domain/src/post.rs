//! Post aggregate

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::content::Content;
use crate::error::{DomainError, Result};
use crate::violation::{violations_from, Violation};

/// A user-written post owning its body.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct Post {
    id: Uuid,
    author_id: Uuid,
    #[validate(nested)]
    content: Content,
    created_at: DateTime<Utc>,
}

impl Post {
    /// Create a post without checking its body.
    pub fn new(author_id: Uuid, content: Content) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Create a post, rejecting it if the body breaks a rule.
    pub fn publish(author_id: Uuid, content: Content) -> Result<Self> {
        let post = Self::new(author_id, content);
        if let Err(errors) = post.validate() {
            let error = DomainError::from(errors);
            error.log();
            return Err(error);
        }

        tracing::debug!(post_id = %post.id, author_id = %author_id, "post published");
        Ok(post)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn author_id(&self) -> Uuid {
        self.author_id
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn violations(&self) -> Vec<Violation> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => violations_from(&errors),
        }
    }
}
