//! Tests for the JSON rendering of authorizer responses
//!
//! The gateway reads these exact key names, so the shape is checked against
//! literal JSON documents.

use serde_json::json;
use token_authorizer::{build_policy, evaluate, AuthResponse, Effect};

#[test]
fn test_allow_response_json() {
    let resource = "arn:aws:execute-api:us-east-1:123456789012:abc123/prod/GET/x";
    let response = evaluate("allow", resource).into_result().unwrap();

    let value = serde_json::to_value(&response).expect("response should serialize");
    assert_eq!(
        value,
        json!({
            "principalId": "user",
            "policyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Action": "execute-api:Invoke",
                    "Effect": "Allow",
                    "Resource": resource
                }]
            },
            "context": {
                "stringKey": "stringval",
                "numberKey": 123,
                "booleanKey": true
            }
        })
    );
}

#[test]
fn test_deny_response_json() {
    let response = evaluate("deny", "R").into_result().unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["policyDocument"]["Statement"][0]["Effect"], "Deny");
    assert_eq!(value["policyDocument"]["Statement"][0]["Resource"], "R");
    assert_eq!(value["context"]["stringKey"], "stringval");
}

#[test]
fn test_response_without_resource_has_no_policy_key() {
    let value = serde_json::to_value(build_policy("user", Effect::Allow, "")).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("policyDocument"));
    assert!(object.contains_key("principalId"));
    assert!(object.contains_key("context"));
}

#[test]
fn test_response_parses_back() {
    let json = r#"{
        "principalId": "user",
        "policyDocument": {
            "Version": "2012-10-17",
            "Statement": [{"Action": "execute-api:Invoke", "Effect": "Deny", "Resource": "R"}]
        },
        "context": {"stringKey": "stringval", "numberKey": 123, "booleanKey": true}
    }"#;

    let parsed: AuthResponse = serde_json::from_str(json).expect("should parse");
    assert_eq!(parsed, build_policy("user", Effect::Deny, "R"));
}
