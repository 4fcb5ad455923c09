use serde::{Deserialize, Serialize};

/// One row of a [RecordData][crate::models::record_data::RecordData], in field name order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default)]
    pub field_values: Vec<String>,
}

impl Record {
    pub fn new(field_values: Vec<String>) -> Self {
        Self { field_values }
    }
}

crate::interact_type!(Record { field_values });
