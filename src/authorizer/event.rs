//! Token authorizer invocation event
//!
//! The JSON payload an HTTP gateway sends to a `TOKEN` authorizer:
//!
//! ```json
//! {
//!   "type": "TOKEN",
//!   "authorizationToken": "allow",
//!   "methodArn": "arn:aws:execute-api:us-east-1:123456789012:abc123/prod/GET/pets"
//! }
//! ```

use super::AuthRequest;
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

/// Event decoding errors
#[derive(Error, Debug)]
pub enum EventError {
    #[error("Failed to read event: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse event: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Invocation event for a token authorizer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAuthorizerEvent {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_arn: Option<String>,
}

impl TokenAuthorizerEvent {
    /// Parse an event from a JSON string
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an event from a reader (file or stdin)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, EventError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json(&content)
    }
}

impl From<TokenAuthorizerEvent> for AuthRequest {
    fn from(event: TokenAuthorizerEvent) -> Self {
        AuthRequest {
            token: event.authorization_token,
            resource_identifier: event.method_arn.unwrap_or_default(),
        }
    }
}
