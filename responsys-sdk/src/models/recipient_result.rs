use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct RecipientResult {
    pub recipient_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

crate::interact_type!(RecipientResult {
    recipient_id,
    error_message,
});
