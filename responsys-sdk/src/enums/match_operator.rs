use super::soap_enum;
use serde::{Deserialize, Serialize};

/// How a list merge combines its match columns.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOperator {
    #[default]
    None,
    And,
}

soap_enum!(MatchOperator {
    None => "NONE",
    And => "AND",
});
