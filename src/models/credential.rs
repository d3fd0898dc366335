//! Credential record persisted per namespace.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of a principal; the API uses both numeric and text ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrincipalId {
    Numeric(i64),
    Text(String),
}

/// Snapshot of the authenticated identity at login time.
///
/// This is a cache, not a live view: it is only replaced by a new login.
/// Fields the server sends beyond the well-known ones are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PrincipalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Principal {
    /// Convenience constructor for a principal with an id and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(PrincipalId::Numeric(id)),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Composite record stored under a namespace's record key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Opaque bearer token issued by the server
    pub token: String,
    /// Identity snapshot captured with the token
    pub principal: Principal,
    /// Milliseconds since the Unix epoch when the record was written
    pub issued_at: i64,
}

impl CredentialRecord {
    /// A record only counts as present when its token is non-empty.
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format_uses_camel_case() {
        let record = CredentialRecord {
            token: "tok".to_string(),
            principal: Principal::new(1, "A"),
            issued_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["issuedAt"], 1_700_000_000_000_i64);
        assert_eq!(json["principal"]["id"], 1);
        assert_eq!(json["principal"]["name"], "A");
        assert!(json["principal"].get("email").is_none());
    }

    #[test]
    fn test_principal_keeps_unknown_fields() {
        let principal: Principal = serde_json::from_str(
            r#"{"id":"u-9","name":"B","balance":"12.50","membership":{"tier":"gold"}}"#,
        )
        .unwrap();
        assert_eq!(principal.id, Some(PrincipalId::Text("u-9".to_string())));
        assert_eq!(principal.extra["balance"], "12.50");
        assert_eq!(principal.extra["membership"]["tier"], "gold");
    }

    #[test]
    fn test_empty_token_is_incomplete() {
        let record = CredentialRecord {
            token: String::new(),
            principal: Principal::default(),
            issued_at: 0,
        };
        assert!(!record.is_complete());
    }
}
