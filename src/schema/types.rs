//! Intern record types
//!
//! Field set:
//! - name: trimmed text, at least 2 characters
//! - email: trimmed, lowercased, unique
//! - role: Frontend | Backend | Fullstack
//! - status: Applied | Interviewing | Hired | Rejected (default Applied)
//! - score: integer 0..=100 (default 0)

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lowest accepted score
pub const MIN_SCORE: i64 = 0;

/// Highest accepted score
pub const MAX_SCORE: i64 = 100;

/// Minimum name length in characters, after trimming
pub const MIN_NAME_LEN: usize = 2;

/// Engineering track an intern applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Frontend,
    Backend,
    Fullstack,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Frontend, Role::Backend, Role::Fullstack];

    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Frontend => "Frontend",
            Role::Backend => "Backend",
            Role::Fullstack => "Fullstack",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL.into_iter().find(|r| r.as_str() == s).ok_or(())
    }
}

/// Hiring pipeline stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Applied,
    Interviewing,
    Hired,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interviewing,
        Status::Hired,
        Status::Rejected,
    ];

    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Hired => "Hired",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL.into_iter().find(|st| st.as_str() == s).ok_or(())
    }
}

/// A persisted intern record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub score: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Intern {
    /// Builds a record from validated input, stamping both timestamps with `now`.
    pub fn create(id: Uuid, new: NewIntern, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            role: new.role,
            status: new.status,
            score: new.score,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a validated patch and refreshes `updated_at`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: InternPatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(score) = patch.score {
            self.score = score;
        }
        self.updated_at = now;
    }
}

/// Validated input for a new record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIntern {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
    pub score: u8,
}

/// Validated partial update; `None` leaves the field as stored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
    pub score: Option<u8>,
}

impl InternPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.status.is_none()
            && self.score.is_none()
    }
}
