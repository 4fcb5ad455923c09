use serde::{Deserialize, Serialize};

/// Outcome of deleting a single list member or table record.
///
/// `id` is always a string; a numeric id in the response is read as its decimal text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exception_code: Option<String>,
    pub id: String,
}

crate::interact_type!(DeleteResult {
    error_message,
    success,
    exception_code,
    id,
});
