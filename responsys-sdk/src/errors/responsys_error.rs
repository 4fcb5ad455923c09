/// Errors returned while reading or building Responsys value objects.
#[derive(Debug, Clone, PartialEq, uniffi::Error, thiserror::Error)]
pub enum ResponsysError {
    #[error("\"{name}\" is not a valid attribute name")]
    InvalidAttributeName { name: String },
    #[error("SOAP object has no \"{field}\" field")]
    MissingField { field: String },
    #[error("Field \"{field}\" does not hold a value of type {expected}")]
    UnexpectedValue { field: String, expected: String },
    #[error("Unknown SOAP type \"{name}\"")]
    UnknownSoapType { name: String },
    #[error("Could not process XML payload: {message}")]
    Xml { message: String },
}
