use crate::errors::responsys_error::ResponsysError;
use crate::soap_object::{SoapFactory, SoapObject};
use log::trace;
use std::collections::BTreeSet;

/// Type names of every interact type this crate declares.
pub const INTERACT_TYPES: [&str; 13] = [
    "DeleteResult",
    "InteractObject",
    "ListMergeRule",
    "LoginResult",
    "MergeResult",
    "OptionalData",
    "Recipient",
    "RecipientData",
    "RecipientResult",
    "Record",
    "RecordData",
    "ServerAuthResult",
    "TriggerResult",
];

/// A [SoapFactory] that creates empty objects for a fixed set of type names.
#[derive(Debug, Clone, Default)]
pub struct StaticFactory {
    types: BTreeSet<String>,
}

impl StaticFactory {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Knows every type in [INTERACT_TYPES].
    pub fn interact() -> Self {
        Self::new(INTERACT_TYPES)
    }

    pub fn register(&mut self, type_name: impl Into<String>) {
        self.types.insert(type_name.into());
    }

    pub fn knows(&self, type_name: &str) -> bool {
        self.types.contains(type_name)
    }
}

impl SoapFactory for StaticFactory {
    type Error = ResponsysError;

    fn create(&self, type_name: &str) -> Result<SoapObject, Self::Error> {
        if !self.knows(type_name) {
            return Err(ResponsysError::UnknownSoapType {
                name: type_name.to_string(),
            });
        }

        trace!("Created SOAP object {type_name}");
        Ok(SoapObject::new(type_name))
    }
}
