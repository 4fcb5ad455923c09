use crate::models::optional_data::OptionalData;
use crate::models::recipient::Recipient;
use serde::{Deserialize, Serialize};

/// A campaign message recipient along with its personalization data.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct RecipientData {
    pub recipient: Recipient,
    #[serde(default)]
    pub optional_data: Vec<OptionalData>,
}

crate::interact_type!(RecipientData {
    recipient,
    optional_data,
});
