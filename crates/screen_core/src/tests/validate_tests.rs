use shared::{Role, UserDraft};

use super::*;

fn draft(name: &str, email: &str, role: Option<Role>) -> UserDraft {
    UserDraft::new(name, email, role)
}

#[test]
fn valid_draft_produces_no_errors() {
    let errors = validate(&draft("Juan Pérez", "juan@example.com", Some(Role::Admin)));
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn boundary_name_lengths_are_accepted() {
    let three = "a".repeat(3);
    let fifty = "a".repeat(50);
    assert!(validate(&draft(&three, "a@b.com", Some(Role::User))).is_empty());
    assert!(validate(&draft(&fifty, "a@b.com", Some(Role::User))).is_empty());
}

#[test]
fn empty_draft_reports_every_field() {
    let errors = validate(&draft("", "", None));
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert_eq!(errors.email.as_deref(), Some("Email is required"));
    assert_eq!(errors.role.as_deref(), Some("Role is required"));
}

#[test]
fn whitespace_only_name_is_required() {
    let errors = validate(&draft("   ", "a@b.com", Some(Role::User)));
    assert_eq!(errors.name.as_deref(), Some("Name is required"));
    assert!(errors.email.is_none());
    assert!(errors.role.is_none());
}

#[test]
fn two_char_name_is_too_short() {
    let errors = validate(&draft("Al", "a@b.com", Some(Role::User)));
    assert_eq!(
        errors.name.as_deref(),
        Some("Name must be at least 3 characters")
    );
    assert!(errors.email.is_none());
    assert!(errors.role.is_none());
}

#[test]
fn fifty_one_char_name_is_too_long() {
    let long = "a".repeat(51);
    let errors = validate(&draft(&long, "a@b.com", Some(Role::User)));
    assert_eq!(
        errors.name.as_deref(),
        Some("Name must be at most 50 characters")
    );
}

#[test]
fn name_length_counts_characters_not_bytes() {
    // three characters, five bytes
    let errors = validate(&draft("ñéz", "a@b.com", Some(Role::User)));
    assert!(errors.name.is_none());
}

#[test]
fn email_without_at_is_invalid() {
    let errors = validate(&draft("Juan", "juanexample.com", Some(Role::User)));
    assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
}

#[test]
fn email_without_domain_dot_is_invalid() {
    let errors = validate(&draft("Juan", "juan@example", Some(Role::User)));
    assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
}

#[test]
fn email_with_whitespace_is_invalid() {
    for email in ["juan @example.com", "juan@exa mple.com", "a@b.com "] {
        let errors = validate(&draft("Juan", email, Some(Role::User)));
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"), "{email}");
    }
}

#[test]
fn email_with_empty_local_part_is_invalid() {
    let errors = validate(&draft("Juan", "@example.com", Some(Role::User)));
    assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
}

#[test]
fn email_domain_dot_needs_non_empty_halves() {
    for email in ["juan@.com", "juan@example."] {
        let errors = validate(&draft("Juan", email, Some(Role::User)));
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"), "{email}");
    }
}

#[test]
fn email_with_multi_label_domain_is_accepted() {
    for email in ["x@sub.domain.tld", "user@mail.co"] {
        let errors = validate(&draft("Juan", email, Some(Role::User)));
        assert!(errors.email.is_none(), "{email}");
    }
}

#[test]
fn missing_role_is_required() {
    let errors = validate(&draft("Juan Pérez", "juan@example.com", None));
    assert!(errors.name.is_none());
    assert!(errors.email.is_none());
    assert_eq!(errors.role.as_deref(), Some("Role is required"));
}

#[test]
fn checks_do_not_short_circuit_across_fields() {
    let errors = validate(&draft("Al", "nope", None));
    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.role.is_some());
}
