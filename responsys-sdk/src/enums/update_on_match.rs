use super::soap_enum;
use serde::{Deserialize, Serialize};

/// What a list merge does with a record that matches an existing member.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateOnMatch {
    #[default]
    ReplaceAll,
    NoUpdate,
}

soap_enum!(UpdateOnMatch {
    ReplaceAll => "REPLACE_ALL",
    NoUpdate => "NO_UPDATE",
});
