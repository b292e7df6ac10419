//! Registration errors

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while populating a [`Registry`](crate::Registry).
#[derive(Debug, Error, Diagnostic)]
pub enum RegistrationError {
    #[error("type `{0}` is already registered")]
    #[diagnostic(code(as_reflect::duplicate_type), help("each qualified type name may be registered once"))]
    DuplicateType(String),

    #[error("unknown type `{name}` referenced by {referenced_by}")]
    #[diagnostic(
        code(as_reflect::unknown_type),
        help("register enums and object types before properties or typedefs that refer to them")
    )]
    UnknownType { name: String, referenced_by: String },

    #[error("{kind} registered with an empty name")]
    #[diagnostic(code(as_reflect::empty_name))]
    EmptyName { kind: &'static str },

    #[error("invalid registry snapshot: {0}")]
    #[diagnostic(code(as_reflect::invalid_snapshot), help("the snapshot must be a JSON object"))]
    InvalidSnapshot(#[from] serde_json::Error),
}
