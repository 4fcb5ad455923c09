use crate::case::{is_attribute_name, is_identifier, to_attribute_name, to_soap_name};
use crate::errors::responsys_error::ResponsysError;
use crate::interact_type::InteractType;
use crate::soap_object::SoapObject;
use crate::soap_value::SoapValue;

#[derive(Debug, Clone, PartialEq)]
struct Attribute {
    name: String,
    soap_name: String,
    value: SoapValue,
}

/// An interact type whose attributes are registered at runtime, for SOAP types this crate
/// does not declare.
///
/// Each attribute keeps the SOAP field name it is written under. No two attributes may share one.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicType {
    soap_name: String,
    attributes: Vec<Attribute>,
}

impl DynamicType {
    pub fn new(soap_name: impl Into<String>) -> Self {
        Self {
            soap_name: soap_name.into(),
            attributes: Vec::new(),
        }
    }

    /// Registers every field of a response object under its snake_case name. The original
    /// field names are kept for [get_soap_object][InteractType::get_soap_object].
    pub fn from_soap_object(soap_object: &SoapObject) -> Result<Self, ResponsysError> {
        let mut dynamic_type = Self::new(soap_object.type_name());
        for (soap_name, value) in soap_object.fields() {
            let name = to_attribute_name(soap_name);
            if !is_identifier(&name) || dynamic_type.is_registered(&name) {
                return Err(ResponsysError::InvalidAttributeName {
                    name: soap_name.to_string(),
                });
            }

            dynamic_type.attributes.push(Attribute {
                name,
                soap_name: soap_name.to_string(),
                value: value.clone(),
            });
        }

        Ok(dynamic_type)
    }

    /// Sets `name` to `value` and registers it, replacing any previous value.
    ///
    /// Fails with [InvalidAttributeName][ResponsysError::InvalidAttributeName] if `name` is not
    /// an identifier, starts with an underscore, or maps to the same SOAP field name as another
    /// registered attribute.
    pub fn soap_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<SoapValue>,
    ) -> Result<(), ResponsysError> {
        let name = name.into();
        if !is_attribute_name(&name) {
            return Err(ResponsysError::InvalidAttributeName { name });
        }

        let value = value.into();
        if let Some(attribute) = self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.name == name)
        {
            attribute.value = value;
            return Ok(());
        }

        let soap_name = to_soap_name(&name);
        if self
            .attributes
            .iter()
            .any(|attribute| attribute.soap_name == soap_name)
        {
            return Err(ResponsysError::InvalidAttributeName { name });
        }

        self.attributes.push(Attribute {
            name,
            soap_name,
            value,
        });

        Ok(())
    }

    /// Builder form of [soap_attribute][DynamicType::soap_attribute].
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<SoapValue>,
    ) -> Result<Self, ResponsysError> {
        self.soap_attribute(name, value)?;
        Ok(self)
    }

    pub fn attribute(&self, name: &str) -> Option<&SoapValue> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Registered names, in registration order.
    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .map(|attribute| attribute.name.as_str())
    }
}

impl InteractType for DynamicType {
    fn soap_name(&self) -> &str {
        &self.soap_name
    }

    fn soap_attributes(&self) -> Vec<(&str, SoapValue)> {
        self.attributes
            .iter()
            .map(|attribute| (attribute.name.as_str(), attribute.value.clone()))
            .collect()
    }

    fn soap_field_name(&self, attribute: &str) -> String {
        self.attributes
            .iter()
            .find(|registered| registered.name == attribute)
            .map_or_else(|| to_soap_name(attribute), |registered| registered.soap_name.clone())
    }
}
