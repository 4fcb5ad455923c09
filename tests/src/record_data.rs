use responsys_sdk::{InteractType, Record, RecordData, ResponsysError, SoapObject, SoapValue};
use std::collections::BTreeMap;

fn row(values: &[(&str, &str)]) -> BTreeMap<String, String> {
    values
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[test]
fn from_rows_takes_field_names_from_first_row() {
    let rows = [
        row(&[("EMAIL_ADDRESS_", "a@example.com"), ("CITY_", "Lisbon")]),
        row(&[("EMAIL_ADDRESS_", "b@example.com"), ("CITY_", "Porto")]),
    ];

    let record_data = RecordData::from_rows(&rows).unwrap();

    assert_eq!(record_data.field_names, ["CITY_", "EMAIL_ADDRESS_"]);
    assert_eq!(
        record_data.records[1],
        Record::new(vec!["Porto".to_string(), "b@example.com".to_string()])
    );
    assert_eq!(record_data.rows(), rows);
}

#[test]
fn from_rows_rejects_incomplete_rows() {
    let rows = [
        row(&[("EMAIL_ADDRESS_", "a@example.com"), ("CITY_", "Lisbon")]),
        row(&[("EMAIL_ADDRESS_", "b@example.com")]),
    ];

    assert_eq!(
        RecordData::from_rows(&rows),
        Err(ResponsysError::MissingField {
            field: "CITY_".to_string()
        })
    );
}

#[test]
fn from_rows_without_rows_is_empty() {
    assert_eq!(RecordData::from_rows(&[]), Ok(RecordData::default()));
}

#[test]
fn reads_from_response() {
    let response = SoapObject::new("RecordData")
        .with("fieldNames", vec!["EMAIL_ADDRESS_", "CITY_"])
        .with(
            "records",
            vec![SoapObject::new("Record").with("fieldValues", vec!["a@example.com", "Lisbon"])],
        );

    let record_data = RecordData::try_from(&response).unwrap();

    assert_eq!(
        record_data.rows(),
        [row(&[("EMAIL_ADDRESS_", "a@example.com"), ("CITY_", "Lisbon")])]
    );
    assert_eq!(
        record_data.get("field_names"),
        Some(SoapValue::from(vec!["EMAIL_ADDRESS_", "CITY_"]))
    );
}
