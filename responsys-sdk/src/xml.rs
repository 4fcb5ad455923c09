use crate::errors::responsys_error::ResponsysError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads an interact type from an XML element with camelCase children, such as the
/// `<result>` of a `loginResponse` body. The root element name is not checked.
pub fn from_xml<T: DeserializeOwned>(xml: &str) -> Result<T, ResponsysError> {
    quick_xml::de::from_str(xml).map_err(|error| ResponsysError::Xml {
        message: error.to_string(),
    })
}

/// Writes an interact type as an XML element named after the type.
pub fn to_xml<T: Serialize>(value: &T) -> Result<String, ResponsysError> {
    quick_xml::se::to_string(value).map_err(|error| ResponsysError::Xml {
        message: error.to_string(),
    })
}
