//! The signed-in user, as far as this crate needs to know about one

use std::env;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Profile fields read from the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub primary_email_address: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CurrentUser {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            first_name: None,
            primary_email_address: None,
            created_at: None,
        }
    }

    pub fn with_first_name(mut self, value: &str) -> Self {
        self.first_name = Some(value.to_string());
        self
    }

    pub fn with_email(mut self, value: &str) -> Self {
        self.primary_email_address = Some(value.to_string());
        self
    }

    /// Name used in greetings
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or("Creator")
    }
}

/// Whether persistence operations may run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    SignedOut,
    SignedIn(CurrentUser),
}

impl Session {
    /// `BRANDSMITH_USER_ID`, plus the optional `BRANDSMITH_USER_NAME` and
    /// `BRANDSMITH_USER_EMAIL`. No id means signed out.
    pub fn from_env() -> Self {
        let id = match env::var("BRANDSMITH_USER_ID") {
            Ok(id) if !id.trim().is_empty() => id,
            _ => return Session::SignedOut,
        };

        let mut user = CurrentUser::new(id.trim());
        if let Ok(name) = env::var("BRANDSMITH_USER_NAME") {
            user = user.with_first_name(name.trim());
        }
        if let Ok(email) = env::var("BRANDSMITH_USER_EMAIL") {
            user = user.with_email(email.trim());
        }
        Session::SignedIn(user)
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Session::SignedIn(user) => Some(user),
            Session::SignedOut => None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user().is_some()
    }

    /// The user, or [`Error::NotSignedIn`]
    pub fn require_user(&self) -> Result<&CurrentUser> {
        self.user().ok_or(Error::NotSignedIn)
    }
}
