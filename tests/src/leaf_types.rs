use responsys_sdk::{
    DeleteResult, InteractObject, InteractType, ListMergeRule, LoginResult, MergeResult,
    RecipientResult, ResponsysError, ServerAuthResult, SoapObject, SoapValue, TriggerResult,
    UpdateOnMatch,
};

#[test]
fn interact_object_has_expected_attributes() {
    let interact_object = InteractObject::new("blarg", "fuuuuu");

    assert_eq!(interact_object.folder_name, "blarg");
    assert_eq!(interact_object.object_name, "fuuuuu");
    assert_eq!(interact_object.get("folder_name"), Some(SoapValue::from("blarg")));
}

#[test]
fn delete_result_has_expected_attributes() {
    let response = SoapObject::new("DeleteResult")
        .with("errorMessage", "")
        .with("success", true)
        .with("exceptionCode", "")
        .with("id", 1);

    let delete_result = DeleteResult::try_from(&response).unwrap();

    assert_eq!(delete_result.error_message.as_deref(), Some(""));
    assert!(delete_result.success);
    assert_eq!(delete_result.exception_code.as_deref(), Some(""));
    assert_eq!(delete_result.id, "1");
}

#[test]
fn login_result_has_expected_attributes() {
    let response = SoapObject::new("LoginResult").with("sessionId", 1);
    let login_result = LoginResult::try_from(&response).unwrap();

    assert_eq!(login_result.session_id, "1");
    assert_eq!(login_result.soap_name(), "LoginResult");
}

#[test]
fn list_merge_rule_has_expected_attributes() {
    let rule = ListMergeRule {
        insert_on_no_match: false,
        ..Default::default()
    };

    assert!(!rule.insert_on_no_match);
    assert_eq!(rule.update_on_match, UpdateOnMatch::ReplaceAll);
    assert_eq!(rule.get("insert_on_no_match"), Some(SoapValue::Bool(false)));
    assert_eq!(rule.get("match_column_name2"), Some(SoapValue::Null));
}

#[test]
fn merge_result_has_expected_attributes() {
    let response = SoapObject::new("MergeResult")
        .with("insertCount", 1)
        .with("updateCount", 1)
        .with("rejectedCount", 1)
        .with("totalCount", 3)
        .with("errorMessage", "Blarg");

    let merge_result = MergeResult::try_from(&response).unwrap();

    assert_eq!(merge_result.insert_count, 1);
    assert_eq!(merge_result.update_count, 1);
    assert_eq!(merge_result.rejected_count, 1);
    assert_eq!(merge_result.total_count, 3);
    assert_eq!(merge_result.error_message.as_deref(), Some("Blarg"));
    assert_eq!(merge_result.accepted_count(), 2);
}

#[test]
fn recipient_result_has_expected_attributes() {
    let response = SoapObject::new("RecipientResult")
        .with("recipientId", 1)
        .with("errorMessage", "Blarg");

    let recipient_result = RecipientResult::try_from(&response).unwrap();

    assert_eq!(recipient_result.recipient_id, 1);
    assert_eq!(recipient_result.error_message.as_deref(), Some("Blarg"));
}

#[test]
fn server_auth_result_has_expected_attributes() {
    let response = SoapObject::new("ServerAuthResult")
        .with("authSessionId", 1)
        .with("encryptedClientChallenge", "boo")
        .with("serverChallenge", "ahhh");

    let server_auth_result = ServerAuthResult::try_from(&response).unwrap();

    assert_eq!(server_auth_result.auth_session_id, "1");
    assert_eq!(server_auth_result.encrypted_client_challenge, "boo");
    assert_eq!(server_auth_result.server_challenge, "ahhh");
}

#[test]
fn trigger_result_accepts_string_numbers() {
    let response = SoapObject::new("TriggerResult")
        .with("recipientId", "42")
        .with("success", "true");

    let trigger_result = TriggerResult::try_from(&response).unwrap();

    assert_eq!(trigger_result.recipient_id, 42);
    assert!(trigger_result.success);
    assert_eq!(trigger_result.error_message, None);
}

#[test]
fn missing_required_field_is_an_error() {
    let response = SoapObject::new("MergeResult")
        .with("insertCount", 1)
        .with("updateCount", 1)
        .with("totalCount", 3);

    assert_eq!(
        MergeResult::try_from(&response),
        Err(ResponsysError::MissingField {
            field: "rejectedCount".to_string()
        })
    );
}

#[test]
fn missing_optional_field_is_none() {
    let response = SoapObject::new("DeleteResult")
        .with("success", true)
        .with("id", "a1");

    let delete_result = DeleteResult::try_from(&response).unwrap();

    assert_eq!(delete_result.error_message, None);
    assert_eq!(delete_result.exception_code, None);
}

#[test]
fn wrongly_typed_field_is_an_error() {
    let response = SoapObject::new("RecipientResult").with("recipientId", "abc");

    assert_eq!(
        RecipientResult::try_from(&response),
        Err(ResponsysError::UnexpectedValue {
            field: "recipientId".to_string(),
            expected: "i64".to_string()
        })
    );
}

#[test]
fn dictionary_lookup_matches_fields() {
    let merge_result = MergeResult {
        insert_count: 4,
        update_count: 0,
        rejected_count: 1,
        total_count: 5,
        error_message: None,
    };

    assert_eq!(merge_result.get("insert_count"), Some(SoapValue::Int(merge_result.insert_count)));
    assert_eq!(merge_result.get("error_message"), Some(SoapValue::Null));
    assert_eq!(merge_result.get("insertCount"), None);
}

#[test]
fn accepted_count_saturates() {
    let merge_result = MergeResult {
        insert_count: i64::MAX,
        update_count: 1,
        rejected_count: 0,
        total_count: i64::MAX,
        error_message: None,
    };

    assert_eq!(merge_result.accepted_count(), i64::MAX);
}
