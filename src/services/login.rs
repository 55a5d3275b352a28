// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login form validation and submission.
//!
//! Two role modes: `user` asks for a full profile, `admin` only for the
//! static demo credential. All rules run on every submit attempt and the
//! resulting error map replaces the previous one wholesale.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldErrors;
use crate::models::{Role, User};
use crate::services::SessionManager;

/// Basic `text@text.text` shape. Deliberately unanchored: any substring of
/// that shape passes, so surrounding junk does not fail the check.
static RE_EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Static demo credential for the admin role.
const ADMIN_PASSWORD: &str = "Admin";

/// Login form fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub age: Option<u32>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            role: Role::User,
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            gender: String::new(),
            age: None,
        }
    }
}

impl LoginForm {
    /// Switch role mode.
    ///
    /// Clears the fields only the user role asks for; email and password
    /// are role-independent and stay untouched.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if role == Role::Admin {
            self.first_name.clear();
            self.last_name.clear();
            self.gender.clear();
            self.age = None;
        }
    }

    /// Run all validation rules, returning per-field messages on failure.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.email.is_empty() {
            errors.insert("email", "Email is required".to_string());
        } else if !RE_EMAIL.is_match(&self.email) {
            errors.insert("email", "Invalid email".to_string());
        }

        if self.password.is_empty() {
            errors.insert("password", "Password is required".to_string());
        }

        if self.role == Role::Admin && self.password != ADMIN_PASSWORD {
            errors.insert("password", "Invalid admin password".to_string());
        }

        if self.role == Role::User {
            if self.first_name.is_empty() {
                errors.insert("first_name", "First name is required".to_string());
            }
            if self.last_name.is_empty() {
                errors.insert("last_name", "Last name is required".to_string());
            }
            if self.gender.is_empty() {
                errors.insert("gender", "Gender is required".to_string());
            }
            if self.age.unwrap_or(0) < 1 {
                errors.insert("age", "Age is required".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Build the user record a successful validation produces.
    pub fn into_user(self) -> User {
        User {
            id: chrono::Utc::now().timestamp_millis().to_string(),
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            age: self.age.unwrap_or(0),
            email: self.email,
            password: self.password,
            role: self.role,
        }
    }

    /// Validate and, on success, log the user in.
    ///
    /// Returns `Ok(established)` where `established` mirrors
    /// [`SessionManager::login`]: `false` means persistence failed and the
    /// session stayed logged out.
    pub async fn submit(self, session: &SessionManager) -> Result<bool, FieldErrors> {
        self.validate()?;
        Ok(session.login(self.into_user()).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user_form() -> LoginForm {
        LoginForm {
            role: Role::User,
            email: "jane@example.com".to_string(),
            password: "hunter2".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            gender: "female".to_string(),
            age: Some(30),
        }
    }

    #[test]
    fn test_valid_user_form_passes() {
        assert!(valid_user_form().validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        let mut form = valid_user_form();
        form.email = "not-an-email".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email").unwrap(), "Invalid email");

        form.email = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("email").unwrap(), "Email is required");

        // The check is a substring match, not a full-string one
        form.email = "Jane Doe <jane@example.com>".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_admin_requires_static_password() {
        let mut form = valid_user_form();
        form.set_role(Role::Admin);
        form.password = "wrong".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.contains_key("password"));

        form.password = "Admin".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_user_missing_fields_reported_exactly() {
        let mut form = valid_user_form();
        form.first_name.clear();
        form.age = Some(0);

        let errors = form.validate().unwrap_err();
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(fields, vec!["age", "first_name"]);
    }

    #[test]
    fn test_role_switch_clears_user_fields_only() {
        let mut form = valid_user_form();
        form.set_role(Role::Admin);

        assert!(form.first_name.is_empty());
        assert!(form.last_name.is_empty());
        assert!(form.gender.is_empty());
        assert_eq!(form.age, None);
        // Role-independent fields survive
        assert_eq!(form.email, "jane@example.com");
        assert_eq!(form.password, "hunter2");
    }
}
