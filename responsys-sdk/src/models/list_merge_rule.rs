use crate::enums::match_operator::MatchOperator;
use crate::enums::permission_status::PermissionStatus;
use crate::enums::update_on_match::UpdateOnMatch;
use serde::{Deserialize, Serialize};

/// Controls how `mergeListMembers` matches incoming records against a list and what it
/// does with them. [Default] gives the behaviour of a plain email list upsert.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ListMergeRule {
    pub insert_on_no_match: bool,
    pub update_on_match: UpdateOnMatch,
    pub match_column_name1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_column_name2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_column_name3: Option<String>,
    pub match_operator: MatchOperator,
    pub optin_value: String,
    pub optout_value: String,
    pub html_value: String,
    pub text_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reject_record_if_channel_empty: Option<String>,
    pub default_permission_status: PermissionStatus,
}

impl Default for ListMergeRule {
    fn default() -> Self {
        Self {
            insert_on_no_match: true,
            update_on_match: UpdateOnMatch::ReplaceAll,
            match_column_name1: "EMAIL_ADDRESS_".to_string(),
            match_column_name2: None,
            match_column_name3: None,
            match_operator: MatchOperator::None,
            optin_value: "I".to_string(),
            optout_value: "O".to_string(),
            html_value: "H".to_string(),
            text_value: "T".to_string(),
            reject_record_if_channel_empty: None,
            default_permission_status: PermissionStatus::Optin,
        }
    }
}

crate::interact_type!(ListMergeRule {
    insert_on_no_match,
    update_on_match,
    match_column_name1,
    match_column_name2,
    match_column_name3,
    match_operator,
    optin_value,
    optout_value,
    html_value,
    text_value,
    reject_record_if_channel_empty,
    default_permission_status,
});
