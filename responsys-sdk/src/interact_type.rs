use crate::case::to_soap_name;
use crate::soap_object::{SoapFactory, SoapObject};
use crate::soap_value::SoapValue;
use log::{debug, trace};

/// Behaviour shared by every Responsys value object.
///
/// Registered attributes are snake_case; [get_soap_object][InteractType::get_soap_object]
/// converts them to the camelCase names the SOAP API expects.
pub trait InteractType {
    /// The SOAP type name, which is the name of the implementing type.
    fn soap_name(&self) -> &str;

    /// Registered attributes and their current values.
    fn soap_attributes(&self) -> Vec<(&str, SoapValue)>;

    /// Like [soap_attributes][InteractType::soap_attributes], but nested interact types
    /// are created through `client`.
    fn request_attributes<F: SoapFactory>(
        &self,
        _client: &F,
    ) -> Result<Vec<(&str, SoapValue)>, F::Error> {
        Ok(self.soap_attributes())
    }

    /// The SOAP field name `attribute` is written under.
    fn soap_field_name(&self, attribute: &str) -> String {
        to_soap_name(attribute)
    }

    /// Dictionary-style lookup of a registered attribute by its snake_case name.
    fn get(&self, attribute: &str) -> Option<SoapValue> {
        self.soap_attributes()
            .into_iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, value)| value)
    }

    /// Asks `client` for an object named after [soap_name][InteractType::soap_name] and copies
    /// every registered attribute onto it. Null attributes are left unset. Errors from
    /// `client` are returned as is.
    fn get_soap_object<F: SoapFactory>(&self, client: &F) -> Result<SoapObject, F::Error> {
        let mut soap_object = client.create(self.soap_name())?;
        for (attribute, value) in self.request_attributes(client)? {
            if value.is_null() {
                continue;
            }

            let name = self.soap_field_name(attribute);
            trace!("{}.{name} = {value:?}", self.soap_name());
            soap_object.set(name, value);
        }

        debug!(
            "Built {} with {} fields",
            soap_object.type_name(),
            soap_object.len()
        );

        Ok(soap_object)
    }
}

/// Implements [InteractType], [SoapField][crate::soap_value::SoapField] and
/// `TryFrom<&SoapObject>` for a struct from its list of registered fields.
/// Every listed field type must implement `SoapField`.
///
/// ```
/// use responsys_sdk::interact_type;
/// use responsys_sdk::interact_type::InteractType;
///
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct CampaignResult {
///     pub campaign_id: i64,
/// }
///
/// interact_type!(CampaignResult { campaign_id });
///
/// let result = CampaignResult { campaign_id: 7 };
/// assert_eq!(result.soap_name(), "CampaignResult");
/// ```
#[macro_export]
macro_rules! interact_type {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::interact_type::InteractType for $name {
            fn soap_name(&self) -> &str {
                stringify!($name)
            }

            fn soap_attributes(&self) -> Vec<(&str, $crate::soap_value::SoapValue)> {
                vec![$((
                    stringify!($field),
                    $crate::soap_value::SoapField::to_soap_value(&self.$field),
                )),*]
            }

            fn request_attributes<F: $crate::soap_object::SoapFactory>(
                &self,
                client: &F,
            ) -> Result<Vec<(&str, $crate::soap_value::SoapValue)>, F::Error> {
                Ok(vec![$((
                    stringify!($field),
                    $crate::soap_value::SoapField::to_request_value(&self.$field, client)?,
                )),*])
            }
        }

        impl TryFrom<&$crate::soap_object::SoapObject> for $name {
            type Error = $crate::errors::responsys_error::ResponsysError;

            fn try_from(
                soap_object: &$crate::soap_object::SoapObject,
            ) -> Result<Self, Self::Error> {
                Ok(Self {
                    $($field: soap_object.field(stringify!($field))?,)*
                })
            }
        }

        impl $crate::soap_value::SoapField for $name {
            fn from_soap_value(
                field: &str,
                value: &$crate::soap_value::SoapValue,
            ) -> Result<Self, $crate::errors::responsys_error::ResponsysError> {
                match value {
                    $crate::soap_value::SoapValue::Object(soap_object) => {
                        Self::try_from(soap_object)
                    }

                    _ => Err($crate::errors::responsys_error::ResponsysError::UnexpectedValue {
                        field: field.to_string(),
                        expected: stringify!($name).to_string(),
                    }),
                }
            }

            fn to_soap_value(&self) -> $crate::soap_value::SoapValue {
                let mut soap_object = $crate::soap_object::SoapObject::new(stringify!($name));
                for (attribute, value) in
                    $crate::interact_type::InteractType::soap_attributes(self)
                {
                    if !value.is_null() {
                        soap_object.set($crate::case::to_soap_name(attribute), value);
                    }
                }

                $crate::soap_value::SoapValue::Object(soap_object)
            }

            fn to_request_value<F: $crate::soap_object::SoapFactory>(
                &self,
                client: &F,
            ) -> Result<$crate::soap_value::SoapValue, F::Error> {
                $crate::interact_type::InteractType::get_soap_object(self, client)
                    .map($crate::soap_value::SoapValue::Object)
            }
        }
    };
}
