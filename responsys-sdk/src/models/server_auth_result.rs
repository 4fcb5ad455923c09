use serde::{Deserialize, Serialize};

/// First half of the certificate login handshake. Challenges are base64 encoded.
///
/// `auth_session_id` is always a string; a numeric id in the response is read as its decimal text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ServerAuthResult {
    pub auth_session_id: String,
    pub encrypted_client_challenge: String,
    pub server_challenge: String,
}

crate::interact_type!(ServerAuthResult {
    auth_session_id,
    encrypted_client_challenge,
    server_challenge,
});
