//! Policy document assembly
//!
//! Builds the `execute-api` policy document returned to the gateway for an
//! allow or deny decision. The JSON shape uses the IAM key names
//! (`Version`, `Statement`, `Action`, `Effect`, `Resource`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IAM policy language version stamped on every document
pub const POLICY_VERSION: &str = "2012-10-17";

/// The only action this authorizer grants or forbids
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Statement effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// A single policy statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    #[serde(rename = "Action")]
    pub action: String,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Resource")]
    pub resource: String,
}

/// Policy document attached to an authorizer response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Statement")]
    pub statements: Vec<Statement>,
}

impl PolicyDocument {
    /// Single-statement document for `execute-api:Invoke` on `resource`
    pub fn invoke(effect: Effect, resource: &str) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statements: vec![Statement {
                action: INVOKE_ACTION.to_string(),
                effect,
                resource: resource.to_string(),
            }],
        }
    }
}

/// Context values the gateway forwards to the backend.
///
/// Gateways only accept string, number and boolean values here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    String(String),
    Number(i64),
    Boolean(bool),
}

/// Authorizer response handed back to the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub principal_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
    pub context: BTreeMap<String, ContextValue>,
}

impl AuthResponse {
    /// Effect of the first statement, if a document is attached
    pub fn effect(&self) -> Option<Effect> {
        self.policy_document
            .as_ref()
            .and_then(|doc| doc.statements.first())
            .map(|statement| statement.effect)
    }
}

/// Static demo context attached to every response
pub fn demo_context() -> BTreeMap<String, ContextValue> {
    BTreeMap::from([
        (
            "stringKey".to_string(),
            ContextValue::String("stringval".to_string()),
        ),
        ("numberKey".to_string(), ContextValue::Number(123)),
        ("booleanKey".to_string(), ContextValue::Boolean(true)),
    ])
}

/// Build the response for `principal_id`.
///
/// The policy document is only attached when `resource` is non-empty.
pub fn build_policy(principal_id: &str, effect: Effect, resource: &str) -> AuthResponse {
    AuthResponse {
        principal_id: principal_id.to_string(),
        policy_document: (!resource.is_empty()).then(|| PolicyDocument::invoke(effect, resource)),
        context: demo_context(),
    }
}
