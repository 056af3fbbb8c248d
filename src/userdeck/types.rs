use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Server-assigned user identifier. Opaque: any JSON value is kept verbatim
/// and only used for display and keying.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Value);

impl UserId {
    #[must_use]
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(id) => formatter.write_str(id),
            other => write!(formatter, "{other}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Unsaved form data. Serialized as the `POST /users` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns a copy with `field` replaced and the other field untouched.
    #[must_use]
    pub fn with_field(&self, field: DraftField, value: impl Into<String>) -> Self {
        let mut draft = self.clone();
        match field {
            DraftField::Name => draft.name = value.into(),
            DraftField::Email => draft.email = value.into(),
        }
        draft
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Response body that wraps its payload under `data`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_id_accepts_numbers_and_strings() -> serde_json::Result<()> {
        let users: Vec<User> = serde_json::from_value(json!([
            { "id": 7, "name": "Ada", "email": "ada@example.com" },
            { "id": "c0ffee", "name": "Grace", "email": "grace@example.com" },
        ]))?;

        assert_eq!(users[0].id, UserId::new(7));
        assert_eq!(users[0].id.to_string(), "7");
        assert_eq!(users[1].id, UserId::new("c0ffee"));
        assert_eq!(users[1].id.to_string(), "c0ffee");
        Ok(())
    }

    #[test]
    fn user_id_is_kept_verbatim_for_any_scalar() -> serde_json::Result<()> {
        let envelope: Envelope<Vec<User>> = serde_json::from_value(json!({
            "data": [
                { "id": u64::MAX, "name": "Ada", "email": "ada@example.com" },
                { "id": 1.5, "name": "Grace", "email": "grace@example.com" },
                { "id": null, "name": "Linus", "email": "linus@example.com" },
            ]
        }))?;

        let ids: Vec<String> = envelope.data.iter().map(|u| u.id.to_string()).collect();
        assert_eq!(ids, ["18446744073709551615", "1.5", "null"]);
        assert_eq!(envelope.data[0].id.as_value(), &json!(u64::MAX));
        Ok(())
    }

    #[test]
    fn envelope_unwraps_data() -> serde_json::Result<()> {
        let envelope: Envelope<Vec<User>> = serde_json::from_value(json!({
            "data": [{ "id": 1, "name": "Ada", "email": "ada@example.com" }]
        }))?;
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].name, "Ada");
        Ok(())
    }

    #[test]
    fn envelope_requires_data_field() {
        let result: serde_json::Result<Envelope<Vec<User>>> =
            serde_json::from_value(json!({ "users": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn with_field_replaces_only_one_field() {
        let draft = UserDraft::new("Ada", "ada@example.com");

        let renamed = draft.with_field(DraftField::Name, "Grace");
        assert_eq!(renamed, UserDraft::new("Grace", "ada@example.com"));

        let moved = draft.with_field(DraftField::Email, "ada@lovelace.dev");
        assert_eq!(moved, UserDraft::new("Ada", "ada@lovelace.dev"));
    }

    #[test]
    fn draft_serializes_as_post_body() -> serde_json::Result<()> {
        let body = serde_json::to_value(UserDraft::new("Ada", "ada@example.com"))?;
        assert_eq!(body, json!({ "name": "Ada", "email": "ada@example.com" }));
        Ok(())
    }

    #[test]
    fn draft_field_parses_case_insensitive() {
        assert_eq!("Name".parse::<DraftField>(), Ok(DraftField::Name));
        assert_eq!("EMAIL".parse::<DraftField>(), Ok(DraftField::Email));
        assert!("phone".parse::<DraftField>().is_err());
    }
}
