use crate::case::to_soap_name;
use crate::errors::responsys_error::ResponsysError;
use crate::soap_value::{SoapField, SoapValue};
use std::collections::BTreeMap;

/// A SOAP request or response object: a type name and its camelCase fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoapObject {
    type_name: String,
    fields: BTreeMap<String, SoapValue>,
}

impl SoapObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder form of [set][SoapObject::set], handy for mocking responses.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<SoapValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SoapValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&SoapValue> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &SoapValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Reads the field backing the snake_case `attribute`, e.g. `error_message` reads `errorMessage`.
    pub fn field<T: SoapField>(&self, attribute: &str) -> Result<T, ResponsysError> {
        let name = to_soap_name(attribute);
        match self.fields.get(&name) {
            Some(value) => T::from_soap_value(&name, value),
            None => T::missing(&name),
        }
    }
}

/// Creates SOAP objects by type name. Implemented by whatever SOAP client talks to Responsys.
pub trait SoapFactory {
    type Error;

    fn create(&self, type_name: &str) -> Result<SoapObject, Self::Error>;
}

impl<F: SoapFactory + ?Sized> SoapFactory for &F {
    type Error = F::Error;

    fn create(&self, type_name: &str) -> Result<SoapObject, Self::Error> {
        (**self).create(type_name)
    }
}
