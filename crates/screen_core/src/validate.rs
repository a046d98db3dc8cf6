//! Draft validation: per-field checks, all run independently so every
//! applicable message is surfaced together.

use shared::{Role, UserDraft};

/// Per-field validation messages. Empty (`is_empty`) means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

pub fn validate(draft: &UserDraft) -> ValidationErrors {
    ValidationErrors {
        name: validate_name(&draft.name),
        email: validate_email(&draft.email),
        role: validate_role(draft.role),
    }
}

fn validate_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name is required".to_string());
    }
    let len = name.chars().count();
    if len < 3 {
        return Some("Name must be at least 3 characters".to_string());
    }
    if len > 50 {
        return Some("Name must be at most 50 characters".to_string());
    }
    None
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    if !email_shape_ok(email) {
        return Some("Email is invalid".to_string());
    }
    None
}

/// Shape check for `local@domain.tld`: no whitespace anywhere, a single `@`
/// with a non-empty local part, and a dot splitting the domain into non-empty
/// halves. Duplicate emails are allowed; there is no uniqueness check.
fn email_shape_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

fn validate_role(role: Option<Role>) -> Option<String> {
    if role.is_none() {
        return Some("Role is required".to_string());
    }
    None
}
