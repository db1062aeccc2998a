use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Result, SalusError};

/// Username and password of a salus-it500.com account.
///
/// Both values are checked once in [`Credentials::new`] and cannot be changed
/// afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// The username has to look like an email address (`local@domain`, exactly
    /// one "@", no whitespace) and the password must not be empty.
    pub fn new(username: impl ToString, password: impl ToString) -> Result<Self> {
        lazy_static! {
            static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
        }
        let username = username.to_string();
        let password = password.to_string();

        if !EMAIL.is_match(&username) {
            return Err(SalusError::InvalidCredentials(format!(
                "username {:?} is not an email address",
                username
            )));
        }
        if password.is_empty() {
            return Err(SalusError::InvalidCredentials(
                "password must not be empty".to_string(),
            ));
        }

        Ok(Credentials { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// -=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-=-
