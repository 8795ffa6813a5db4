//! Wire schema for the remote threads service.
//!
//! DESIGN
//! ======
//! Only the fields a view actually consumes are required. Everything else is
//! defaulted so additive server changes never break a loader.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// A post as listed on the home page or shown on its own page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post identifier. The service emits integers; older fixtures use strings.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub author_id: Option<String>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Text to show as the post heading: the title, else the body.
    #[must_use]
    pub fn headline(&self) -> &str {
        if self.title.trim().is_empty() {
            self.content.as_deref().unwrap_or_default()
        } else {
            &self.title
        }
    }
}

/// Response body of `GET /threads/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<Post>,
}

/// Body of `POST /threads/users/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// Body of `POST /threads/auth/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// Extract a user-facing message from an error response body.
///
/// Preference order: `{"error": "..."}`, `{"error": {"message": "..."}}`,
/// `{"detail": "..."}`, `{"message": "..."}`, then the first message of the
/// first field, in document order, of a validation map such as
/// `{"email": ["already taken"]}`.
#[must_use]
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    if let Some(error) = object.get("error") {
        if let Some(text) = non_empty(error.as_str()) {
            return Some(text);
        }
        if let Some(text) = non_empty(error.get("message").and_then(serde_json::Value::as_str)) {
            return Some(text);
        }
    }

    for key in ["detail", "message"] {
        if let Some(text) = non_empty(object.get(key).and_then(serde_json::Value::as_str)) {
            return Some(text);
        }
    }

    object.values().find_map(|field| {
        let first = field.as_array()?.first()?;
        non_empty(first.as_str())
    })
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_owned)
}
