use crate::errors::responsys_error::ResponsysError;
use crate::soap_object::{SoapFactory, SoapObject};

/// A value held by a SOAP object field.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<SoapValue>),
    Object(SoapObject),
}

impl SoapValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SoapValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SoapValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SoapValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SoapValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&SoapObject> {
        match self {
            SoapValue::Object(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for SoapValue {
    fn from(value: bool) -> Self {
        SoapValue::Bool(value)
    }
}

impl From<i64> for SoapValue {
    fn from(value: i64) -> Self {
        SoapValue::Int(value)
    }
}

impl From<i32> for SoapValue {
    fn from(value: i32) -> Self {
        SoapValue::Int(value.into())
    }
}

impl From<u32> for SoapValue {
    fn from(value: u32) -> Self {
        SoapValue::Int(value.into())
    }
}

impl From<&str> for SoapValue {
    fn from(value: &str) -> Self {
        SoapValue::Str(value.to_string())
    }
}

impl From<String> for SoapValue {
    fn from(value: String) -> Self {
        SoapValue::Str(value)
    }
}

impl From<SoapObject> for SoapValue {
    fn from(value: SoapObject) -> Self {
        SoapValue::Object(value)
    }
}

impl<T: Into<SoapValue>> From<Vec<T>> for SoapValue {
    fn from(values: Vec<T>) -> Self {
        SoapValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<SoapValue>> From<Option<T>> for SoapValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SoapValue::Null, Into::into)
    }
}

pub(crate) fn unexpected(field: &str, expected: &str) -> ResponsysError {
    ResponsysError::UnexpectedValue {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

/// A type that can be stored in an interact type field.
///
/// `field` is always the camelCase SOAP name and is only used for error reporting.
pub trait SoapField: Sized {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError>;

    /// Called when a response object lacks the field entirely.
    fn missing(field: &str) -> Result<Self, ResponsysError> {
        Err(ResponsysError::MissingField {
            field: field.to_string(),
        })
    }

    fn to_soap_value(&self) -> SoapValue;

    /// Same as [to_soap_value][SoapField::to_soap_value], except that nested interact types
    /// are created through `client`.
    fn to_request_value<F: SoapFactory>(&self, _client: &F) -> Result<SoapValue, F::Error> {
        Ok(self.to_soap_value())
    }
}

impl SoapField for bool {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        match value {
            SoapValue::Bool(value) => Ok(*value),
            SoapValue::Str(value) => match value.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(unexpected(field, "bool")),
            },

            _ => Err(unexpected(field, "bool")),
        }
    }

    fn to_soap_value(&self) -> SoapValue {
        SoapValue::Bool(*self)
    }
}

impl SoapField for i64 {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        match value {
            SoapValue::Int(value) => Ok(*value),
            SoapValue::Str(value) => value.trim().parse().or(Err(unexpected(field, "i64"))),
            _ => Err(unexpected(field, "i64")),
        }
    }

    fn to_soap_value(&self) -> SoapValue {
        SoapValue::Int(*self)
    }
}

// Responsys returns identifiers as strings, but some toolkits hand them over as numbers
impl SoapField for String {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        match value {
            SoapValue::Str(value) => Ok(value.clone()),
            SoapValue::Int(value) => Ok(value.to_string()),
            SoapValue::Bool(value) => Ok(value.to_string()),
            _ => Err(unexpected(field, "string")),
        }
    }

    fn to_soap_value(&self) -> SoapValue {
        SoapValue::Str(self.clone())
    }
}

impl SoapField for SoapValue {
    fn from_soap_value(_field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        Ok(value.clone())
    }

    fn missing(_field: &str) -> Result<Self, ResponsysError> {
        Ok(SoapValue::Null)
    }

    fn to_soap_value(&self) -> SoapValue {
        self.clone()
    }
}

impl<T: SoapField> SoapField for Option<T> {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        match value {
            SoapValue::Null => Ok(None),
            value => T::from_soap_value(field, value).map(Some),
        }
    }

    fn missing(_field: &str) -> Result<Self, ResponsysError> {
        Ok(None)
    }

    fn to_soap_value(&self) -> SoapValue {
        self.as_ref().map_or(SoapValue::Null, T::to_soap_value)
    }

    fn to_request_value<F: SoapFactory>(&self, client: &F) -> Result<SoapValue, F::Error> {
        match self {
            Some(value) => value.to_request_value(client),
            None => Ok(SoapValue::Null),
        }
    }
}

impl<T: SoapField> SoapField for Vec<T> {
    fn from_soap_value(field: &str, value: &SoapValue) -> Result<Self, ResponsysError> {
        match value {
            SoapValue::Null => Ok(Vec::new()),
            SoapValue::List(values) => values
                .iter()
                .map(|value| T::from_soap_value(field, value))
                .collect(),

            _ => Err(unexpected(field, "list")),
        }
    }

    fn to_soap_value(&self) -> SoapValue {
        SoapValue::List(self.iter().map(T::to_soap_value).collect())
    }

    fn to_request_value<F: SoapFactory>(&self, client: &F) -> Result<SoapValue, F::Error> {
        self.iter()
            .map(|value| value.to_request_value(client))
            .collect::<Result<Vec<_>, _>>()
            .map(SoapValue::List)
    }
}
