pub mod delete_result;
pub mod interact_object;
pub mod list_merge_rule;
pub mod login_result;
pub mod merge_result;
pub mod optional_data;
pub mod recipient;
pub mod recipient_data;
pub mod recipient_result;
pub mod record;
pub mod record_data;
pub mod server_auth_result;
pub mod trigger_result;
