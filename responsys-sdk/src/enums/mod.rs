pub mod email_format;
pub mod match_operator;
pub mod permission_status;
pub mod update_on_match;

/// Implements `as_str`, `from_soap_str` and [SoapField][crate::soap_value::SoapField] for a
/// fieldless enum from its SOAP spellings.
macro_rules! soap_enum {
    ($name:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)*
                }
            }

            pub fn from_soap_str(value: &str) -> Option<Self> {
                match value.trim() {
                    $($value => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl $crate::soap_value::SoapField for $name {
            fn from_soap_value(
                field: &str,
                value: &$crate::soap_value::SoapValue,
            ) -> Result<Self, $crate::errors::responsys_error::ResponsysError> {
                value
                    .as_str()
                    .and_then(Self::from_soap_str)
                    .ok_or($crate::soap_value::unexpected(field, stringify!($name)))
            }

            fn to_soap_value(&self) -> $crate::soap_value::SoapValue {
                $crate::soap_value::SoapValue::Str(self.as_str().to_string())
            }
        }
    };
}

pub(crate) use soap_enum;
