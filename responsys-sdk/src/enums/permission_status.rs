use super::soap_enum;
use serde::{Deserialize, Serialize};

/// Permission given to new list members when a record has no opt-in/opt-out value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionStatus {
    #[default]
    Optin,
    Optout,
}

soap_enum!(PermissionStatus {
    Optin => "OPTIN",
    Optout => "OPTOUT",
});
