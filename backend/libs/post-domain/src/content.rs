//! Post body value object

use validator::Validate;

use crate::error::{DomainError, Result};
use crate::violation::{validate_content, Violation};

/// Rule broken by a post body.
///
/// The two rules are disjoint: length is only measured on a present value,
/// and presence is only checked when the value is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRule {
    /// Body is absent
    Required,
    /// Body is longer than [`Content::MAX_CHARS`] characters
    MaxLength,
}

impl ContentRule {
    /// Evaluate the rules against a raw body, returning the one that fails.
    pub fn evaluate(content: Option<&str>) -> Option<Self> {
        match content {
            None => Some(Self::Required),
            Some(text) if text.chars().count() > Content::MAX_CHARS => Some(Self::MaxLength),
            Some(_) => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => Content::REQUIRED_CODE,
            Self::MaxLength => Content::TOO_LONG_CODE,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => Content::REQUIRED_MESSAGE,
            Self::MaxLength => Content::TOO_LONG_MESSAGE,
        }
    }
}

/// Body text of a post.
///
/// Construction through [`Content::new`] or the `From` impls always succeeds,
/// even for values that break the rules; call [`Validate::validate`] (or
/// [`Content::violations`]) before accepting one. [`Content::try_new`]
/// combines both steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Validate)]
pub struct Content {
    #[validate(
        required(message = "본문을 입력해주세요"),
        length(max = 500, message = "본문은 500자를 넘을 수 없습니다.")
    )]
    content: Option<String>,
}

impl Content {
    /// Field name reported in violations
    pub const FIELD: &'static str = "content";

    /// Maximum body length, counted in characters. Kept in step with the
    /// `length` rule on the field.
    pub const MAX_CHARS: usize = 500;

    pub const REQUIRED_CODE: &'static str = "required";
    pub const TOO_LONG_CODE: &'static str = "length";

    pub const REQUIRED_MESSAGE: &'static str = "본문을 입력해주세요";
    pub const TOO_LONG_MESSAGE: &'static str = "본문은 500자를 넘을 수 없습니다.";

    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }

    /// Build a body and reject it immediately if it breaks a rule.
    pub fn try_new(content: impl Into<String>) -> Result<Self> {
        let content = Self::new(Some(content.into()));
        if let Err(errors) = content.validate() {
            tracing::debug!(field = Self::FIELD, "content rejected");
            return Err(errors.into());
        }
        Ok(content)
    }

    /// Stored body, exactly as given.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn into_inner(self) -> Option<String> {
        self.content
    }

    pub fn is_valid(&self) -> bool {
        ContentRule::evaluate(self.content()).is_none()
    }

    pub fn violations(&self) -> Vec<Violation> {
        validate_content(self.content())
    }
}

impl From<String> for Content {
    fn from(content: String) -> Self {
        Self::new(Some(content))
    }
}

impl From<&str> for Content {
    fn from(content: &str) -> Self {
        Self::new(Some(content.to_owned()))
    }
}

impl From<Option<String>> for Content {
    fn from(content: Option<String>) -> Self {
        Self::new(content)
    }
}

impl TryFrom<Content> for String {
    type Error = DomainError;

    fn try_from(content: Content) -> Result<Self> {
        content.validate()?;
        // validate() only passes for a present body
        Ok(content.into_inner().unwrap_or_default())
    }
}
