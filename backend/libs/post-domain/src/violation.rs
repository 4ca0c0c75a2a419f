//! Validation violations
//!
//! Framework-independent records of broken rules, plus the glue that turns
//! `validator` engine output into them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::content::{Content, ContentRule};

/// A single broken rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted path of the failing attribute (e.g. "content.content")
    pub field: String,

    /// Stable machine-readable code (e.g. "required", "length")
    pub code: String,

    /// Human-readable message shown to the author
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    fn from_engine(field: String, error: &ValidationError) -> Self {
        let message = error
            .message
            .as_deref()
            .map(str::to_owned)
            .unwrap_or_else(|| error.code.to_string());

        Self {
            field,
            code: error.code.to_string(),
            message,
        }
    }
}

/// Validate a raw post body.
///
/// Returns an empty list when the body is acceptable. At most one violation
/// is produced since an absent body has no length to measure.
pub fn validate_content(content: Option<&str>) -> Vec<Violation> {
    ContentRule::evaluate(content)
        .map(|rule| Violation::new(Content::FIELD, rule.code(), rule.message()))
        .into_iter()
        .collect()
}

/// Flatten engine errors into violations, sorted by field then code.
///
/// Nested struct errors are reported with a dotted path and list items with
/// an index suffix (`items[2].content`).
pub fn violations_from(errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations = Vec::new();
    collect(errors, None, &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    violations
}

fn collect(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(
                    field_errors
                        .iter()
                        .map(|error| Violation::from_engine(path.clone(), error)),
                );
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

/// Client-friendly grouping of violations by field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationResponse {
    pub message: String,
    pub errors: BTreeMap<String, Vec<FieldViolation>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub code: String,
    pub message: String,
}

impl ViolationResponse {
    pub fn new(message: impl Into<String>, violations: &[Violation]) -> Self {
        let mut errors: BTreeMap<String, Vec<FieldViolation>> = BTreeMap::new();
        for violation in violations {
            errors
                .entry(violation.field.clone())
                .or_default()
                .push(FieldViolation {
                    code: violation.code.clone(),
                    message: violation.message.clone(),
                });
        }

        Self {
            message: message.into(),
            errors,
        }
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_validate_content_valid() {
        assert!(validate_content(Some("유효한 내용")).is_empty());
        assert!(validate_content(Some("a")).is_empty());
    }

    #[test]
    fn test_validate_content_missing() {
        let violations = validate_content(None);
        assert_eq!(
            violations,
            vec![Violation::new("content", "required", "본문을 입력해주세요")]
        );
    }

    #[test]
    fn test_validate_content_too_long_only_reports_length() {
        let long = "a".repeat(501);
        let violations = validate_content(Some(&long));

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, "length");
        assert_eq!(violations[0].message, "본문은 500자를 넘을 수 없습니다.");
    }

    #[test]
    fn test_violations_from_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("required"));
        let mut with_message = ValidationError::new("length");
        with_message.message = Some(Cow::Borrowed("too long"));
        errors.add("body", with_message);

        let violations = violations_from(&errors);
        assert_eq!(
            violations,
            vec![
                Violation::new("body", "length", "too long"),
                Violation::new("title", "required", "required"),
            ]
        );
    }

    #[test]
    fn test_response_groups_by_field() {
        let violations = vec![
            Violation::new("content", "required", "본문을 입력해주세요"),
            Violation::new("content", "length", "본문은 500자를 넘을 수 없습니다."),
            Violation::new("title", "required", "제목을 입력해주세요"),
        ];

        let response = ViolationResponse::new("Validation failed", &violations);
        assert_eq!(response.error_count(), 3);
        assert_eq!(response.errors["content"].len(), 2);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["errors"]["title"][0]["code"], "required");
    }
}
