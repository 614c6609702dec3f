//
//  zenhub-cli
//  api/pipeline/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue};
use tracing::trace;

use super::{Next, PipelineRequest, PipelineStep, RawResponse};
use crate::api::common::{ApiError, Result};
use crate::auth::{Credential, TOKEN_HEADER};

/// Attaches the API token to every outbound request.
///
/// The header is inserted, not appended, so a request carries exactly one
/// `X-Authentication-Token` no matter how many times it passes through. The
/// stored header value is marked sensitive and never appears in logs.
#[derive(Debug, Clone)]
pub struct AuthenticationStep {
    name: HeaderName,
    value: HeaderValue,
}

impl AuthenticationStep {
    /// Creates the step from a credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] when the token contains bytes that
    /// are not legal in an HTTP header.
    pub fn new(credential: &Credential) -> Result<Self> {
        let mut value = HeaderValue::from_str(credential.token())
            .map_err(|_| ApiError::invalid_argument("token", "contains invalid header characters"))?;
        value.set_sensitive(true);

        Ok(Self {
            name: HeaderName::from_static(TOKEN_HEADER),
            value,
        })
    }
}

#[async_trait]
impl PipelineStep for AuthenticationStep {
    fn name(&self) -> &'static str {
        "authentication"
    }

    async fn process(&self, mut request: PipelineRequest, next: Next<'_>) -> Result<RawResponse> {
        trace!(header = TOKEN_HEADER, "Attaching credential");
        request.headers.insert(self.name.clone(), self.value.clone());
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_is_sensitive() {
        let credential = Credential::new("dummyToken").unwrap();
        let step = AuthenticationStep::new(&credential).unwrap();
        assert!(step.value.is_sensitive());
        assert!(!format!("{:?}", step).contains("dummyToken"));
    }

    #[test]
    fn test_rejects_header_breaking_token() {
        let credential = Credential::new("bad\ntoken").unwrap();
        assert!(matches!(
            AuthenticationStep::new(&credential),
            Err(ApiError::InvalidArgument(_))
        ));
    }
}
