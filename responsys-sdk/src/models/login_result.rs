use serde::{Deserialize, Serialize};

/// Returned by `login`. The session ID goes into the header of every following call.
///
/// `session_id` is always a string; a numeric id in the response is read as its decimal text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub session_id: String,
}

crate::interact_type!(LoginResult { session_id });
