use responsys_sdk::xml::{from_xml, to_xml};
use responsys_sdk::{DeleteResult, InteractObject, LoginResult, MergeResult, RecordData};

#[test]
fn login_result_from_xml() {
    let login_result: LoginResult =
        from_xml("<result><sessionId>a1b2c3</sessionId></result>").unwrap();

    assert_eq!(login_result.session_id, "a1b2c3");
}

#[test]
fn merge_result_from_xml() {
    let merge_result: MergeResult = from_xml(
        "<result>\
            <insertCount>1</insertCount>\
            <updateCount>1</updateCount>\
            <rejectedCount>1</rejectedCount>\
            <totalCount>3</totalCount>\
            <errorMessage>Blarg</errorMessage>\
        </result>",
    )
    .unwrap();

    assert_eq!(merge_result.total_count, 3);
    assert_eq!(merge_result.error_message.as_deref(), Some("Blarg"));
}

#[test]
fn delete_result_without_error_from_xml() {
    let delete_result: DeleteResult =
        from_xml("<result><success>true</success><id>1</id></result>").unwrap();

    assert!(delete_result.success);
    assert_eq!(delete_result.id, "1");
    assert_eq!(delete_result.error_message, None);
}

#[test]
fn record_data_from_xml() {
    let record_data: RecordData = from_xml(
        "<recordData>\
            <fieldNames>EMAIL_ADDRESS_</fieldNames>\
            <fieldNames>CITY_</fieldNames>\
            <records><fieldValues>a@example.com</fieldValues><fieldValues>Lisbon</fieldValues></records>\
        </recordData>",
    )
    .unwrap();

    assert_eq!(record_data.field_names, ["EMAIL_ADDRESS_", "CITY_"]);
    assert_eq!(record_data.records[0].field_values, ["a@example.com", "Lisbon"]);
}

#[test]
fn missing_field_in_xml_is_an_error() {
    assert!(from_xml::<LoginResult>("<result></result>").is_err());
}

#[test]
fn interact_object_to_xml() {
    let xml = to_xml(&InteractObject::new("Marketing", "Newsletter")).unwrap();

    assert!(xml.starts_with("<InteractObject>"));
    assert!(xml.contains("<folderName>Marketing</folderName>"));
    assert!(xml.contains("<objectName>Newsletter</objectName>"));
}
