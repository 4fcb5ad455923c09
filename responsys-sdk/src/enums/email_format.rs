use super::soap_enum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, uniffi::Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmailFormat {
    TextFormat,
    HtmlFormat,
    MultipartFormat,
    #[default]
    NoFormat,
}

soap_enum!(EmailFormat {
    TextFormat => "TEXT_FORMAT",
    HtmlFormat => "HTML_FORMAT",
    MultipartFormat => "MULTIPART_FORMAT",
    NoFormat => "NO_FORMAT",
});
