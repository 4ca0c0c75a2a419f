//! Post domain model
//!
//! Value objects and the post aggregate shared by services that accept
//! user-written posts. Validation rules are declared on the types and
//! evaluated through the `validator` engine; failures are surfaced as
//! [`Violation`] records rather than construction errors.

pub mod config;
pub mod content;
pub mod error;
pub mod post;
pub mod telemetry;
pub mod violation;

pub use config::DomainConfig;
pub use content::{Content, ContentRule};
pub use error::{DomainError, Result};
pub use post::Post;
pub use violation::{
    validate_content, violations_from, FieldViolation, Violation, ViolationResponse,
};
