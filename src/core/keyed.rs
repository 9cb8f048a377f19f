/*
Inputs:

    map: key -> record (JSON object)

    options: identifier field name (default "id"), non-object policy

Outputs:

    new map, same keys in the same order, every record = shallow copy of the
    input record + { identifier_field: key }

Rules:

    injected identifier always wins over an existing field of the same name

    input is borrowed, never mutated

    all-or-nothing: one bad value fails the whole call
*/
use log::{debug, trace};
use serde_json::{Map, Value};

use crate::core::error::{value_kind, KeyedDataError, Result};
use crate::core::options::{KeyedOptions, NonObjectPolicy};

/// Build one output record: the fields of `value` plus `identifier_field = key`.
pub fn keyed_record(
    key: &str,
    value: &Value,
    options: &KeyedOptions,
) -> Result<Map<String, Value>> {
    let mut record = match (value, options.non_object) {
        (Value::Object(fields), _) => fields.clone(),
        (_, NonObjectPolicy::TreatAsEmpty) => {
            trace!("treating {} value for `{}` as an empty record", value_kind(value), key);
            Map::new()
        }
        (_, NonObjectPolicy::Reject) => {
            return Err(KeyedDataError::NotAnObject {
                key: key.to_string(),
                found: value_kind(value),
            });
        }
    };

    //overwrites in place if the field already exists
    record.insert(options.identifier_field.clone(), Value::String(key.to_string()));
    Ok(record)
}

/// Inject every record's own key into its identifier field.
///
/// Returns a freshly allocated map with the same keys, in the same order, as
/// `map`. Fails on the first value that is not an object unless the options
/// say to treat such values as empty records.
pub fn build_keyed_data(
    map: &Map<String, Value>,
    options: &KeyedOptions,
) -> Result<Map<String, Value>> {
    debug!(
        "building {} keyed records (identifier field `{}`)",
        map.len(),
        options.identifier_field
    );

    map.iter()
        .map(|(key, value)| {
            keyed_record(key, value, options).map(|record| (key.clone(), Value::Object(record)))
        })
        .collect()
}

pub fn build_keyed_data_default(map: &Map<String, Value>) -> Result<Map<String, Value>> {
    build_keyed_data(map, &KeyedOptions::default())
}

//checks the fixed point: every record already carries its own key
pub fn verify_keyed(map: &Map<String, Value>, options: &KeyedOptions) -> Result<()> {
    let field = &options.identifier_field;

    for (key, value) in map.iter() {
        let record = value
            .as_object()
            .ok_or_else(|| KeyedDataError::NotAnObject {
                key: key.clone(),
                found: value_kind(value),
            })?;

        match record.get(field) {
            None => {
                return Err(KeyedDataError::MissingIdentifier {
                    key: key.clone(),
                    field: field.clone(),
                });
            }
            Some(Value::String(id)) if id == key => {}
            Some(other) => {
                return Err(KeyedDataError::IdentifierMismatch {
                    key: key.clone(),
                    found: other.to_string(),
                });
            }
        }
    }
    Ok(())
}
