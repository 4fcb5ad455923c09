use heck::{ToLowerCamelCase, ToSnakeCase};

/// Converts a snake_case attribute name into the camelCase name the SOAP API uses,
/// e.g. `match_column_name1` becomes `matchColumnName1`.
pub fn to_soap_name(attribute: &str) -> String {
    attribute.to_lower_camel_case()
}

/// The inverse of [to_soap_name].
pub fn to_attribute_name(soap_name: &str) -> String {
    soap_name.to_snake_case()
}

/// Whether `name` can be registered as an attribute: an ASCII letter or underscore
/// followed by letters, digits or underscores.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }

        _ => false,
    }
}

/// Whether `name` can be registered on a [DynamicType][crate::dynamic_type::DynamicType]:
/// an identifier without a leading underscore, since [to_soap_name] drops leading
/// underscores and would send a different (or empty) field name.
pub fn is_attribute_name(name: &str) -> bool {
    is_identifier(name) && !name.starts_with('_')
}
