use serde::{Deserialize, Serialize};

/// Counters returned by `mergeListMembers` and the table merge calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub insert_count: i64,
    pub update_count: i64,
    pub rejected_count: i64,
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl MergeResult {
    pub fn accepted_count(&self) -> i64 {
        self.insert_count.saturating_add(self.update_count)
    }
}

crate::interact_type!(MergeResult {
    insert_count,
    update_count,
    rejected_count,
    total_count,
    error_message,
});
