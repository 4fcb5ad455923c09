use serde::{Deserialize, Serialize};

/// Outcome of triggering a campaign message for one recipient.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct TriggerResult {
    pub recipient_id: i64,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

crate::interact_type!(TriggerResult {
    recipient_id,
    success,
    error_message,
});
