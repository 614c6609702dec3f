//
//  zenhub-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! ZenHub authenticates API calls with a single personal API token sent in the
//! `X-Authentication-Token` header. This module holds that token and the
//! helpers the CLI uses to obtain it.
//!
//! ## Module Structure
//!
//! - [`Credential`]: The token, with a `Debug` impl that never prints it
//! - [`token`]: Reading and format-checking tokens from the command line
//!
//! ## Example
//!
//! ```rust
//! use zenhub_cli::auth::Credential;
//!
//! let credential = Credential::new("abc123").unwrap();
//! assert_eq!(format!("{:?}", credential), "Credential(****)");
//! ```
//!
//! ## Generating a Token
//!
//! Tokens are created from the ZenHub dashboard under *API Tokens*. They do
//! not expire; revoke them from the same page.

mod token;

pub use token::*;

use std::fmt;

use crate::api::common::{ApiError, Result};

/// Header carrying the API token.
pub const TOKEN_HEADER: &str = "x-authentication-token";

/// Environment variable the CLI reads the token from.
pub const TOKEN_ENV: &str = "ZENHUB_TOKEN";

/// A ZenHub API token.
///
/// The token is trimmed on construction. `Debug` output is redacted so the
/// credential can sit inside structs that are logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
}

impl Credential {
    /// Wraps a token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] for an empty or whitespace-only
    /// token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(ApiError::invalid_argument("token", "must not be empty"));
        }
        Ok(Self {
            token: token.to_string(),
        })
    }

    /// The raw token. Only the authentication step should need this.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_trims() {
        let credential = Credential::new("  dummyToken\n").unwrap();
        assert_eq!(credential.token(), "dummyToken");
    }

    #[test]
    fn test_credential_rejects_blank() {
        assert!(Credential::new("").is_err());
        assert!(Credential::new("   ").is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let credential = Credential::new("secret-value").unwrap();
        assert!(!format!("{:?}", credential).contains("secret-value"));
    }
}
