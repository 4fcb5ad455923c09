//! Typed value objects for the Responsys Interact SOAP API.
//!
//! Responses handed back by a SOAP client are read into snake_case structs, and those structs
//! can be turned back into request objects through any [SoapFactory].
//! # Reading a response
//! ```
//! use responsys_sdk::{InteractType, MergeResult, SoapObject, SoapValue};
//!
//! let response = SoapObject::new("MergeResult")
//!     .with("insertCount", 1)
//!     .with("updateCount", 1)
//!     .with("rejectedCount", 1)
//!     .with("totalCount", 3)
//!     .with("errorMessage", "Blarg");
//!
//! let result = MergeResult::try_from(&response).unwrap();
//! assert_eq!(result.total_count, 3);
//! assert_eq!(result.get("error_message"), Some(SoapValue::from("Blarg")));
//! ```
//! # Building a request
//! ```
//! use responsys_sdk::{InteractObject, InteractType, SoapValue, StaticFactory};
//!
//! let list = InteractObject::new("Marketing", "Newsletter");
//! let soap_object = list.get_soap_object(&StaticFactory::interact()).unwrap();
//!
//! assert_eq!(soap_object.type_name(), "InteractObject");
//! assert_eq!(soap_object.get("objectName"), Some(&SoapValue::from("Newsletter")));
//! ```
//! # Bindings
//! Bindings for Kotlin and Swift can be generated with
//! [UniFFI](https://mozilla.github.io/uniffi-rs/latest/tutorial/foreign_language_bindings.html#multi-crate-workspaces).
//!

pub mod case;
pub mod dynamic_type;
pub mod enums;
pub mod errors;
pub mod interact_type;
pub mod models;
pub mod soap_object;
pub mod soap_value;
pub mod static_factory;
#[cfg(feature = "xml")]
pub mod xml;

uniffi::setup_scaffolding!();

pub use dynamic_type::DynamicType;
pub use enums::email_format::EmailFormat;
pub use enums::match_operator::MatchOperator;
pub use enums::permission_status::PermissionStatus;
pub use enums::update_on_match::UpdateOnMatch;
pub use errors::responsys_error::ResponsysError;
pub use interact_type::InteractType;
pub use models::delete_result::DeleteResult;
pub use models::interact_object::InteractObject;
pub use models::list_merge_rule::ListMergeRule;
pub use models::login_result::LoginResult;
pub use models::merge_result::MergeResult;
pub use models::optional_data::OptionalData;
pub use models::recipient::Recipient;
pub use models::recipient_data::RecipientData;
pub use models::recipient_result::RecipientResult;
pub use models::record::Record;
pub use models::record_data::RecordData;
pub use models::server_auth_result::ServerAuthResult;
pub use models::trigger_result::TriggerResult;
pub use soap_object::{SoapFactory, SoapObject};
pub use soap_value::{SoapField, SoapValue};
pub use static_factory::StaticFactory;
