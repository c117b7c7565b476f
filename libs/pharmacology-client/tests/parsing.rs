use pharmsearch_client::{parse_count, parse_results, split_relation_expr, RELATION_SEPARATOR};
use serde_json::json;

#[test]
fn zero_count_is_a_valid_count() {
    let raw = json!({
        "result": { "primaryTopic": { "targetPharmacologyTotalResults": 0 } }
    })
    .to_string();
    assert_eq!(parse_count(&raw).unwrap(), 0);
}

#[test]
fn empty_page_parses_to_no_records() {
    let raw = json!({ "result": { "items": [] } }).to_string();
    assert!(parse_results(&raw).unwrap().is_empty());
}

#[test]
fn records_serialize_with_field_names() {
    let raw = json!({
        "result": {
            "items": [{
                "_about": "act-1",
                "activityActivityType": "IC50",
                "activityStandardValue": "4.2"
            }]
        }
    })
    .to_string();
    let records = parse_results(&raw).unwrap();
    let value = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(value["about"], "act-1");
    assert_eq!(value["activity_type"], "IC50");
    assert_eq!(value["activity_value"], 4.2);
}

#[test]
fn relation_expr_round_trips_through_split() {
    let relations = vec![">", "<=", "="];
    let expr: String = relations
        .iter()
        .map(|r| format!("{r}{RELATION_SEPARATOR}"))
        .collect();
    assert_eq!(expr, ">|<=|=|");
    assert_eq!(split_relation_expr(&expr), relations);
}
