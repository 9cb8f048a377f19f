use indexmap::IndexMap;
use keyed_data::{
    build_keyed_data, build_keyed_data_default, verify_keyed, Keyed, KeyedDataBuilder,
    KeyedDataError, KeyedOptions, KeyedTable, NonObjectPolicy,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Status {
    label: String,
    terminal: bool,
}

fn statuses() -> IndexMap<String, Status> {
    let mut m = IndexMap::new();
    m.insert("open".to_string(), Status { label: "Open".into(), terminal: false });
    m.insert("closed".to_string(), Status { label: "Closed".into(), terminal: true });
    m
}

#[test]
fn static_lookup_table_without_repeating_keys() {
    let table: IndexMap<String, Keyed<Status>> =
        KeyedDataBuilder::new().build_into(&statuses()).unwrap();

    for (key, status) in &table {
        assert_eq!(&status.id, key);
    }
    assert!(table["closed"].terminal);
    assert_eq!(table["open"].label, "Open");
}

#[test]
fn typed_and_dynamic_paths_agree() {
    let opts = KeyedOptions::new().with_identifier_field("code");

    let typed = KeyedDataBuilder::<Status>::with_options(opts.clone()).build(&statuses()).unwrap();

    let raw = serde_json::to_value(statuses()).unwrap();
    let dynamic = build_keyed_data(raw.as_object().unwrap(), &opts).unwrap();

    assert_eq!(typed, dynamic);
    verify_keyed(&typed, &opts).unwrap();
}

#[test]
fn whole_build_fails_on_one_bad_value() {
    let input = json!({ "a": { "x": 1 }, "b": "oops", "c": { "y": 2 } });

    let err = build_keyed_data_default(input.as_object().unwrap()).unwrap_err();
    assert_eq!(err, KeyedDataError::NotAnObject { key: "b".into(), found: "string" });
    assert_eq!(err.to_string(), "value for key `b` is not an object (found string)");
}

#[test]
fn table_survives_toon_round_trip() {
    let input = json!({
        "foo": { "name": "Foo" },
        "bar": { "name": "Bar" },
    });
    let opts = KeyedOptions::new().with_non_object(NonObjectPolicy::TreatAsEmpty);
    let table = KeyedTable::from_value(&input, opts.clone()).unwrap();

    let text = table.to_toon().unwrap();
    let reloaded = KeyedTable::from_toon(&text, opts).unwrap();

    assert_eq!(reloaded, table);
    let foo = Value::Object(reloaded.get("foo").unwrap().clone());
    assert_eq!(foo, json!({ "id": "foo", "name": "Foo" }));
}
