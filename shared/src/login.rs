use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// The "valid e-mail address" production browsers apply to `<input type="email">`.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub fn id(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            LoginField::Email => "Example@email.com",
            LoginField::Password => "At least 8 characters",
        }
    }

    pub fn all() -> &'static [LoginField] {
        &[LoginField::Email, LoginField::Password]
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0} is required")]
    MissingField(LoginField),
    #[error("Email is not a valid address")]
    InvalidEmail,
}

/// Local state of the login form. Lives only as long as the page is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    /// Returns a copy with `field` replaced, leaving the other field untouched.
    pub fn with(&self, field: LoginField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    /// Applies the same checks the browser runs before letting the form
    /// submit: `required` on both inputs and `type=email` on the first.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.email.is_empty() {
            return Err(LoginError::MissingField(LoginField::Email));
        }
        if !email_regex().is_match(&self.email) {
            return Err(LoginError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(LoginError::MissingField(LoginField::Password));
        }
        Ok(())
    }

    pub fn attempt(&self) -> Result<LoginAttempt, LoginError> {
        self.validate()?;
        Ok(LoginAttempt {
            email: self.email.clone(),
            password_len: self.password.chars().count(),
        })
    }
}

/// Diagnostic record of a sign-in submit. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub email: String,
    pub password_len: usize,
}
