//! Intern record validation
//!
//! Validation semantics:
//! - Create: name, email and role must be present; status and score default
//! - Update: only supplied fields are checked
//! - Every failing field is reported, not just the first
//! - Strings are trimmed, email is lowercased before checks
//! - Keys outside the record schema are ignored
//!
//! The validator never touches the store; uniqueness is the store's job.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::errors::{Field, FieldViolation, ValidationErrors, ValidationResult};
use super::types::{InternPatch, NewIntern, Role, Status, MAX_SCORE, MIN_NAME_LEN, MIN_SCORE};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validates candidate intern records supplied as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternValidator;

impl InternValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validates a full record for creation.
    ///
    /// # Errors
    ///
    /// Returns every violation found when a required field is missing or
    /// any present field breaks its rule.
    pub fn validate_new(&self, body: &Value) -> ValidationResult<NewIntern> {
        let obj = as_object(body)?;
        let mut violations = Vec::new();

        let name = required(obj, Field::Name, parse_name, &mut violations);
        let email = required(obj, Field::Email, parse_email, &mut violations);
        let role = required(obj, Field::Role, parse_role, &mut violations);
        let status = optional(obj, Field::Status, parse_status, &mut violations);
        let score = optional(obj, Field::Score, parse_score, &mut violations);

        match (name, email, role) {
            (Some(name), Some(email), Some(role)) if violations.is_empty() => Ok(NewIntern {
                name,
                email,
                role,
                status: status.unwrap_or_default(),
                score: score.unwrap_or(0),
            }),
            _ => Err(ValidationErrors::from_violations(violations)),
        }
    }

    /// Validates a partial update.
    ///
    /// Absent fields are left alone; a field explicitly set to `null` is
    /// treated as an attempt to clear it and rejected.
    pub fn validate_patch(&self, body: &Value) -> ValidationResult<InternPatch> {
        let obj = as_object(body)?;
        let mut violations = Vec::new();

        let patch = InternPatch {
            name: optional(obj, Field::Name, parse_name, &mut violations),
            email: optional(obj, Field::Email, parse_email, &mut violations),
            role: optional(obj, Field::Role, parse_role, &mut violations),
            status: optional(obj, Field::Status, parse_status, &mut violations),
            score: optional(obj, Field::Score, parse_score, &mut violations),
        };

        if violations.is_empty() {
            Ok(patch)
        } else {
            Err(ValidationErrors::from_violations(violations))
        }
    }
}

fn as_object(body: &Value) -> ValidationResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| ValidationErrors::body("Request body must be a JSON object"))
}

type Parser<T> = fn(&Value) -> Result<T, FieldViolation>;

fn required<T>(
    obj: &Map<String, Value>,
    field: Field,
    parse: Parser<T>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match obj.get(field.key()) {
        None => {
            violations.push(FieldViolation::required(field));
            None
        }
        Some(value) => collect(parse(value), violations),
    }
}

fn optional<T>(
    obj: &Map<String, Value>,
    field: Field,
    parse: Parser<T>,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    obj.get(field.key())
        .and_then(|value| collect(parse(value), violations))
}

fn collect<T>(result: Result<T, FieldViolation>, violations: &mut Vec<FieldViolation>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

/// Reads a trimmed, non-empty string. Null and blank count as missing.
fn non_blank(value: &Value, field: Field) -> Result<&str, FieldViolation> {
    match value {
        Value::Null => Err(FieldViolation::required(field)),
        Value::String(s) if s.trim().is_empty() => Err(FieldViolation::required(field)),
        Value::String(s) => Ok(s.trim()),
        _ => Err(FieldViolation::not_a_string(field)),
    }
}

fn parse_name(value: &Value) -> Result<String, FieldViolation> {
    let name = non_blank(value, Field::Name)?;
    if name.chars().count() < MIN_NAME_LEN {
        return Err(FieldViolation::new(
            Field::Name,
            format!("Name must be at least {MIN_NAME_LEN} characters long"),
        ));
    }
    Ok(name.to_string())
}

fn parse_email(value: &Value) -> Result<String, FieldViolation> {
    let email = non_blank(value, Field::Email)?.to_lowercase();
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(FieldViolation::new(
            Field::Email,
            "Please provide a valid email address",
        ));
    }
    Ok(email)
}

fn parse_role(value: &Value) -> Result<Role, FieldViolation> {
    let raw = non_blank(value, Field::Role)?;
    raw.parse()
        .map_err(|_| FieldViolation::new(Field::Role, format!("{raw} is not a valid role")))
}

fn parse_status(value: &Value) -> Result<Status, FieldViolation> {
    let raw = non_blank(value, Field::Status)?;
    raw.parse()
        .map_err(|_| FieldViolation::new(Field::Status, format!("{raw} is not a valid status")))
}

fn parse_score(value: &Value) -> Result<u8, FieldViolation> {
    let not_integer = || FieldViolation::new(Field::Score, "Score must be an integer");

    let n = value.as_f64().ok_or_else(not_integer)?;
    if n.fract() != 0.0 {
        return Err(not_integer());
    }
    if n < MIN_SCORE as f64 {
        return Err(FieldViolation::new(
            Field::Score,
            format!("Score must be at least {MIN_SCORE}"),
        ));
    }
    if n > MAX_SCORE as f64 {
        return Err(FieldViolation::new(
            Field::Score,
            format!("Score must be at most {MAX_SCORE}"),
        ));
    }
    Ok(n as u8)
}
