use serde::{Deserialize, Serialize};

/// A name/value pair made available to a campaign's personalization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct OptionalData {
    pub name: String,
    pub value: String,
}

impl OptionalData {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

crate::interact_type!(OptionalData { name, value });
