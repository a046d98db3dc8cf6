use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

impl Role {
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("admin") {
            Some(Role::Admin)
        } else if value.eq_ignore_ascii_case("moderator") {
            Some(Role::Moderator)
        } else if value.eq_ignore_ascii_case("user") {
            Some(Role::User)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
        }
    }

    /// Human-readable label for table and form rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Moderator => "Moderator",
            Role::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// User-entered form payload, not yet validated. `role: None` models the
/// "no role selected" form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Prefill from an existing record when the edit form opens.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: Some(record.role),
        }
    }
}

impl Default for UserDraft {
    /// Create-form reset state: empty fields with the role preselected.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Some(Role::User),
        }
    }
}
