// typed front-end: pick the value type first, then hand over the map
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::core::error::{value_kind, KeyedDataError, Result};
use crate::core::keyed::build_keyed_data;
use crate::core::options::{KeyedOptions, DEFAULT_IDENTIFIER_FIELD};

/// A record of type `T` paired with its key under the default `id` field.
///
/// Serializes as the fields of `T` plus `"id"`. When `T` declares an `id`
/// field of its own, both sides see the same identifier: deserializing hands
/// the key to `T` as well, and serializing writes `"id"` once, from `self.id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    pub id: String,
    pub value: T,
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let value = serde_json::to_value(&self.value).map_err(<S::Error as ser::Error>::custom)?;
        let mut record = match value {
            Value::Object(fields) => fields,
            other => {
                let msg = format!("keyed value must be a record, found {}", value_kind(&other));
                return Err(ser::Error::custom(msg));
            }
        };

        //the key wins over whatever `T` wrote under the same name
        record.insert(DEFAULT_IDENTIFIER_FIELD.to_string(), Value::String(self.id.clone()));
        record.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = Map::<String, Value>::deserialize(deserializer)?;

        let id = match record.get(DEFAULT_IDENTIFIER_FIELD) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                let msg = format!("`id` must be a string, found {}", value_kind(other));
                return Err(de::Error::custom(msg));
            }
            None => return Err(de::Error::missing_field("id")),
        };

        //`T` gets the full record, identifier included
        let value = T::deserialize(Value::Object(record)).map_err(<D::Error as de::Error>::custom)?;
        Ok(Self { id, value })
    }
}

impl<T> Keyed<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Keyed<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<T> DerefMut for Keyed<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

/// Builder that fixes the value type `T` before the map is supplied.
///
/// ```
/// use indexmap::IndexMap;
/// use keyed_data::{Keyed, KeyedDataBuilder};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Color { hex: String }
///
/// let mut colors = IndexMap::new();
/// colors.insert("red".to_string(), Color { hex: "#f00".into() });
///
/// let keyed: IndexMap<String, Keyed<Color>> =
///     KeyedDataBuilder::<Color>::new().build_into(&colors).unwrap();
/// assert_eq!(keyed["red"].id, "red");
/// assert_eq!(keyed["red"].hex, "#f00");
/// ```
pub struct KeyedDataBuilder<T> {
    options: KeyedOptions,
    _value: PhantomData<fn() -> T>,
}

impl<T> KeyedDataBuilder<T> {
    pub fn new() -> Self {
        Self::with_options(KeyedOptions::default())
    }

    pub fn with_options(options: KeyedOptions) -> Self {
        Self { options, _value: PhantomData }
    }

    pub fn with_identifier_field(mut self, field: impl Into<String>) -> Self {
        self.options = self.options.with_identifier_field(field);
        self
    }

    pub fn options(&self) -> &KeyedOptions {
        &self.options
    }
}

impl<T> Default for KeyedDataBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for KeyedDataBuilder<T> {
    fn clone(&self) -> Self {
        Self::with_options(self.options.clone())
    }
}

impl<T> fmt::Debug for KeyedDataBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedDataBuilder")
            .field("value_type", &std::any::type_name::<T>())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: Serialize> KeyedDataBuilder<T> {
    /// Serialize every value and inject its key. Key order is preserved.
    pub fn build(&self, map: &IndexMap<String, T>) -> Result<Map<String, Value>> {
        let mut values = Map::new();
        for (key, value) in map {
            let value = serde_json::to_value(value).map_err(|e| KeyedDataError::Serialize {
                key: key.clone(),
                message: e.to_string(),
            })?;
            values.insert(key.clone(), value);
        }

        build_keyed_data(&values, &self.options)
    }

    /// Like [`build`](Self::build), then read each record back as `U`.
    ///
    /// `U` is normally a type declaring the identifier field next to the
    /// fields of `T`, or [`Keyed<T>`] when the default `id` field is used.
    pub fn build_into<U: DeserializeOwned>(
        &self,
        map: &IndexMap<String, T>,
    ) -> Result<IndexMap<String, U>> {
        self.build(map)?
            .into_iter()
            .map(|(key, record)| match serde_json::from_value::<U>(record) {
                Ok(value) => Ok((key, value)),
                Err(e) => Err(KeyedDataError::Deserialize { key, message: e.to_string() }),
            })
            .collect()
    }
}
