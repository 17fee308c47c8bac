use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Link between the signed-in user and an external identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBinding {
    pub provider: String,
    pub provider_uid: String,
    #[serde(default)]
    pub created_at: String,
}

impl UserBinding {
    /// Parses `createdAt` as an RFC 3339 timestamp.
    pub fn created_at_time(&self) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.created_at)
    }
}

/// Body of `POST /system/sso/unbind`.
#[derive(Debug, Clone, Serialize)]
pub struct UnbindRequest<'a> {
    pub provider: &'a str,
}
