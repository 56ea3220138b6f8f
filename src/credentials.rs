use std::fmt;

use crate::error::Error;

/// Endpoint every production client talks to.
const PRODUCTION_ENDPOINT: &str = "https://reseller.hosterapi.de/api/v1/";

/// Endpoint used when the sandbox flag is set.
const SANDBOX_ENDPOINT: &str = "https://reseller-sandbox.hosterapi.de/api/v1/";

/// An API token resolved against one of the two fixed endpoints.
///
/// The base URL is derived solely from the sandbox flag at construction
/// time and never changes afterwards.
#[derive(Debug, Clone)]
pub struct Credentials {
    token: String,
    sandbox: bool,
    url: String,
}

impl Credentials {
    /// Resolves a token against the production or sandbox endpoint.
    pub fn new(token: &str, sandbox: bool) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::InvalidArgument(
                "API token must not be empty".to_string(),
            ));
        }

        let url = if sandbox {
            SANDBOX_ENDPOINT
        } else {
            PRODUCTION_ENDPOINT
        };

        Ok(Self {
            token: token.to_string(),
            sandbox,
            url: url.to_string(),
        })
    }

    /// The resolved base URL, including the API version prefix.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The bearer token presented on every request.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    // Lets the builder point a client at a mock or self-hosted gateway.
    // Not reachable once the client owns the credentials.
    pub(crate) fn set_url(&mut self, url: String) {
        self.url = url;
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Host: {}], [Token: {}].", self.url, self.token)
    }
}
