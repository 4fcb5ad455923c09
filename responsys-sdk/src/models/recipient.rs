use crate::enums::email_format::EmailFormat;
use crate::models::interact_object::InteractObject;
use serde::{Deserialize, Serialize};

/// Identifies a list member. Set whichever identifiers the list merge rule matches on.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_name: Option<InteractObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_format: Option<EmailFormat>,
}

impl Recipient {
    pub fn by_email(list_name: InteractObject, email_address: impl Into<String>) -> Self {
        Self {
            list_name: Some(list_name),
            email_address: Some(email_address.into()),
            ..Default::default()
        }
    }
}

crate::interact_type!(Recipient {
    list_name,
    recipient_id,
    customer_id,
    email_address,
    mobile_number,
    email_format,
});
