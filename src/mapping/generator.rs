/*
Inputs:

    table.toon (root object: key -> record)

    optional options.toon (identifier_field, non_object)

Outputs:

    KeyedTable: key -> record with { identifier_field: key } injected

Responsibilities:

    Decode the TOON document into records

    Key every record (see core::keyed)

    Keep key order stable so re-encoding is reproducible
*/
use log::debug;
use serde_json::{Map, Value};

use crate::core::error::{value_kind, KeyedDataError, Result};
use crate::core::keyed::build_keyed_data;
use crate::core::options::KeyedOptions;

/// A keyed lookup table together with the options it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedTable {
    records: Map<String, Value>,
    options: KeyedOptions,
}

impl KeyedTable {
    pub fn from_map(map: &Map<String, Value>, options: KeyedOptions) -> Result<Self> {
        let records = build_keyed_data(map, &options)?;
        Ok(Self { records, options })
    }

    /// Decode a TOON document whose root is an object of records and key it.
    pub fn from_toon(text: &str, options: KeyedOptions) -> Result<Self> {
        let root: Value =
            toon_format::decode_default(text).map_err(|e| KeyedDataError::Decode(e.to_string()))?;
        debug!("decoded TOON table ({})", value_kind(&root));

        Self::from_value(&root, options)
    }

    /// Key a document whose root must be an object of records.
    pub fn from_value(root: &Value, options: KeyedOptions) -> Result<Self> {
        match root {
            Value::Object(map) => Self::from_map(map, options),
            other => Err(KeyedDataError::NotATable { found: value_kind(other) }),
        }
    }

    pub fn to_toon(&self) -> Result<String> {
        toon_format::encode_default(&self.records)
            .map_err(|e| KeyedDataError::Encode(e.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&Map<String, Value>> {
        self.records.get(key).and_then(Value::as_object)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &KeyedOptions {
        &self.options
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.keys().map(String::as_str)
    }

    //for reports
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.records
    }
}

/// Read [`KeyedOptions`] from a TOON document. Missing fields use defaults.
pub fn options_from_toon(text: &str) -> Result<KeyedOptions> {
    toon_format::decode_default(text).map_err(|e| KeyedDataError::Decode(e.to_string()))
}
