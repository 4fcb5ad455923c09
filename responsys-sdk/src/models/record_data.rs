use crate::errors::responsys_error::ResponsysError;
use crate::models::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tabular payload of the list and table calls: a header of field names and one
/// [Record] per row.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct RecordData {
    #[serde(default)]
    pub field_names: Vec<String>,
    #[serde(default)]
    pub records: Vec<Record>,
}

impl RecordData {
    /// Builds record data from rows keyed by field name. Field names come from the first row
    /// and every other row must have a value for each of them.
    pub fn from_rows(rows: &[BTreeMap<String, String>]) -> Result<Self, ResponsysError> {
        let Some(first) = rows.first() else {
            return Ok(Self::default());
        };

        let field_names: Vec<String> = first.keys().cloned().collect();
        let records = rows
            .iter()
            .map(|row| {
                field_names
                    .iter()
                    .map(|name| {
                        row.get(name)
                            .cloned()
                            .ok_or(ResponsysError::MissingField {
                                field: name.clone(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Record::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            field_names,
            records,
        })
    }

    /// Rows keyed by field name. Values past the end of the header are dropped.
    pub fn rows(&self) -> Vec<BTreeMap<String, String>> {
        self.records
            .iter()
            .map(|record| {
                self.field_names
                    .iter()
                    .cloned()
                    .zip(record.field_values.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

crate::interact_type!(RecordData {
    field_names,
    records,
});
