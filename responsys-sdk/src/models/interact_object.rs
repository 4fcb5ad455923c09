use serde::{Deserialize, Serialize};

/// Identifies a list, table or campaign by the folder it lives in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct InteractObject {
    pub folder_name: String,
    pub object_name: String,
}

impl InteractObject {
    pub fn new(folder_name: impl Into<String>, object_name: impl Into<String>) -> Self {
        Self {
            folder_name: folder_name.into(),
            object_name: object_name.into(),
        }
    }
}

crate::interact_type!(InteractObject {
    folder_name,
    object_name,
});
