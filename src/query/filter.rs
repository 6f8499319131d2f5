//! # Record Filters
//!
//! Constraints applied to the record set before pagination. Every active
//! constraint must match (AND semantics).

use crate::schema::Intern;

/// Filter over intern records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternFilter {
    /// Case-insensitive substring matched against name or email.
    /// Stored lowercased.
    search: Option<String>,

    /// Exact role match
    role: Option<String>,

    /// Exact status match
    status: Option<String>,
}

impl InternFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to records whose name or email contains `term`.
    ///
    /// The term is matched literally; blank terms are ignored.
    pub fn search(mut self, term: impl AsRef<str>) -> Self {
        let term = term.as_ref().trim();
        self.search = (!term.is_empty()).then(|| term.to_lowercase());
        self
    }

    /// Restrict to an exact role value
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Restrict to an exact status value
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.role.is_none() && self.status.is_none()
    }

    /// Check if a record matches all active constraints
    pub fn matches(&self, intern: &Intern) -> bool {
        if let Some(term) = &self.search {
            let hit = intern.name.to_lowercase().contains(term.as_str())
                || intern.email.to_lowercase().contains(term.as_str());
            if !hit {
                return false;
            }
        }

        if let Some(role) = &self.role {
            if intern.role.as_str() != role {
                return false;
            }
        }

        if let Some(status) = &self.status {
            if intern.status.as_str() != status {
                return false;
            }
        }

        true
    }
}
