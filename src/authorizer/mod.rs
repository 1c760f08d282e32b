//! Token authorizer
//!
//! Maps a bearer token onto an allow/deny policy or one of two rejection
//! signals. Only three sentinel token values carry meaning:
//!
//! | token          | outcome                         |
//! |----------------|---------------------------------|
//! | `allow`        | policy with `Effect: Allow`     |
//! | `deny`         | policy with `Effect: Deny`      |
//! | `unauthorized` | [`Outcome::Unauthorized`] (401) |
//! | anything else  | [`Outcome::InvalidToken`] (500) |
//!
//! Matching is exact and case-sensitive.

use crate::policy::{build_policy, AuthResponse, Effect};
use thiserror::Error;
use tracing::debug;

pub mod event;

pub use event::{EventError, TokenAuthorizerEvent};

/// Principal reported for every authorized request
pub const PRINCIPAL_ID: &str = "user";

/// Authorizer errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizerError {
    /// Gateways turn exactly this message into a 401.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid token")]
    InvalidToken,
}

impl AuthorizerError {
    /// HTTP status a gateway conventionally answers with
    pub fn status_code(&self) -> u16 {
        match self {
            AuthorizerError::Unauthorized => 401,
            AuthorizerError::InvalidToken => 500,
        }
    }
}

/// Result of a single authorization decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Authorized(AuthResponse),
    Unauthorized,
    InvalidToken,
}

impl Outcome {
    /// Split into the response value or a named error
    pub fn into_result(self) -> Result<AuthResponse, AuthorizerError> {
        match self {
            Outcome::Authorized(response) => Ok(response),
            Outcome::Unauthorized => Err(AuthorizerError::Unauthorized),
            Outcome::InvalidToken => Err(AuthorizerError::InvalidToken),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Authorized(_) => 200,
            Outcome::Unauthorized => AuthorizerError::Unauthorized.status_code(),
            Outcome::InvalidToken => AuthorizerError::InvalidToken.status_code(),
        }
    }

    /// Stable label for logs and metrics
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Authorized(response) => match response.effect() {
                Some(Effect::Allow) => "allow",
                Some(Effect::Deny) => "deny",
                None => "no_policy",
            },
            Outcome::Unauthorized => "unauthorized",
            Outcome::InvalidToken => "invalid_token",
        }
    }
}

/// Decide the outcome for `token` against `resource_identifier`.
///
/// The resource identifier is opaque and echoed verbatim into the policy.
pub fn evaluate(token: &str, resource_identifier: &str) -> Outcome {
    let outcome = match token {
        "allow" => Outcome::Authorized(build_policy(
            PRINCIPAL_ID,
            Effect::Allow,
            resource_identifier,
        )),
        "deny" => Outcome::Authorized(build_policy(
            PRINCIPAL_ID,
            Effect::Deny,
            resource_identifier,
        )),
        "unauthorized" => Outcome::Unauthorized,
        _ => Outcome::InvalidToken,
    };

    debug!(
        outcome = outcome.label(),
        resource = resource_identifier,
        "Token evaluated"
    );

    outcome
}

/// Authorization request as received from the invoking harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub token: Option<String>,
    pub resource_identifier: String,
}

impl AuthRequest {
    pub fn new(token: impl Into<String>, resource_identifier: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            resource_identifier: resource_identifier.into(),
        }
    }
}

/// Authorizer trait
pub trait Authorizer: Send + Sync {
    /// Decide the outcome for a request
    fn authorize(&self, request: &AuthRequest) -> Outcome;
}

/// Authorizer that only recognises the sentinel token values
#[derive(Debug, Clone, Copy, Default)]
pub struct SentinelAuthorizer;

impl Authorizer for SentinelAuthorizer {
    fn authorize(&self, request: &AuthRequest) -> Outcome {
        match request.token.as_deref() {
            Some(token) => evaluate(token, &request.resource_identifier),
            None => {
                debug!(resource = %request.resource_identifier, "Request carries no token");
                Outcome::InvalidToken
            }
        }
    }
}
