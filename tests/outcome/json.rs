use serde::{Deserialize, Serialize};
use serde_json::json;

use sequence_rail::{sequence, Outcome};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    id: u32,
    name: String,
}

#[test]
fn outcome_is_externally_tagged() {
    let ok: Outcome<u32, String> = Outcome::success(1);
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!({ "Success": 1 }));

    let err: Outcome<u32, String> = Outcome::failure("bad".to_string());
    assert_eq!(serde_json::to_value(&err).unwrap(), json!({ "Failure": "bad" }));

    let back: Outcome<u32, String> = serde_json::from_str(r#"{"Failure":"bad"}"#).unwrap();
    assert_eq!(back, err);
}

#[test]
fn decoding_payloads_as_units() {
    let payloads = [
        r#"{"id": 1, "name": "bolt"}"#,
        r#"{"id": 2, "name": "nut"}"#,
    ];
    let units = payloads.map(|raw| move || Outcome::from(serde_json::from_str::<Item>(raw)));
    let items = sequence(units).unwrap_success();
    assert_eq!(items[1], Item { id: 2, name: "nut".to_string() });

    let broken = [r#"{"id": 1, "name": "bolt"}"#, r#"{"id": "x"}"#];
    let units = broken.map(|raw| move || Outcome::from(serde_json::from_str::<Item>(raw)));
    let error = sequence(units).into_failure().unwrap();
    assert!(error.is_data());
}

#[test]
fn aggregate_outcome_serializes_values_in_order() {
    let units = (1..=3).map(|id| move || Outcome::<u32, String>::success(id * 10));
    let aggregate = sequence(units);
    assert_eq!(
        serde_json::to_string(&aggregate).unwrap(),
        r#"{"Success":[10,20,30]}"#
    );
}
