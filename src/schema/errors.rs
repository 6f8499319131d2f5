//! Field-level validation errors

use std::fmt;

/// Record fields, in the order violations are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Role,
    Status,
    Score,
}

impl Field {
    /// JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Status => "status",
            Field::Score => "score",
        }
    }

    /// Capitalized label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Role => "Role",
            Field::Status => "Status",
            Field::Score => "Score",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single rule violation on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: Field) -> Self {
        Self::new(field, format!("{} is required", field.label()))
    }

    pub fn not_a_string(field: Field) -> Self {
        Self::new(field, format!("{} must be a string", field.label()))
    }
}

/// All violations found in one candidate record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
    body: Option<String>,
}

impl ValidationErrors {
    /// Error for a body that could not be read as a record at all
    pub fn body(message: impl Into<String>) -> Self {
        Self {
            violations: Vec::new(),
            body: Some(message.into()),
        }
    }

    pub(crate) fn from_violations(mut violations: Vec<FieldViolation>) -> Self {
        violations.sort_by_key(|v| v.field);
        Self {
            violations,
            body: None,
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Individual messages, in field order
    pub fn messages(&self) -> Vec<String> {
        match &self.body {
            Some(message) => vec![message.clone()],
            None => self.violations.iter().map(|v| v.message.clone()).collect(),
        }
    }

    /// Messages joined into a single line
    pub fn message(&self) -> String {
        self.messages().join(", ")
    }

    /// Whether a violation was recorded for `field`
    pub fn has(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationErrors {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationErrors>;
