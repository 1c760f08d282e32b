//! Token Authorizer Library
//!
//! Demonstration token authorizer for HTTP gateways. A bearer token is
//! matched against three sentinel values and turned into an
//! `execute-api:Invoke` policy document or a rejection.
//!
//! # Example
//!
//! ```
//! use token_authorizer::{evaluate, Effect, Outcome};
//!
//! match evaluate("allow", "arn:aws:execute-api:us-east-1:123456789012:abc/prod/GET/pets") {
//!     Outcome::Authorized(response) => assert_eq!(response.effect(), Some(Effect::Allow)),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

pub mod authorizer;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod policy;

// Re-export commonly used types
pub use authorizer::{
    evaluate, AuthRequest, Authorizer, AuthorizerError, Outcome, SentinelAuthorizer,
    TokenAuthorizerEvent,
};
pub use config::Config;
pub use policy::{build_policy, AuthResponse, Effect, PolicyDocument, Statement};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
