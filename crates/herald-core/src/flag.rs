use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A process-wide key/value record.
///
/// Global flags have no owning tenant by construction; there is no tenant
/// field to set, so they can only be reached through the unscoped flag storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFlag {
    pub key: String,
    /// String-encoded value
    pub value: String,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl GlobalFlag {
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        category: impl Into<String>,
        updated_at: OffsetDateTime,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            category: category.into(),
            updated_at,
        }
    }

    /// Interpret the value as a boolean. Only a case-insensitive "true" is truthy.
    pub fn as_bool(&self) -> bool {
        self.value.trim().eq_ignore_ascii_case("true")
    }
}
