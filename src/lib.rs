//! Keyed lookup tables without repeating the key.
//!
//! Takes a map from string keys to records and returns a new map where every
//! record carries its own key in an identifier field (`"id"` unless configured
//! otherwise). The input is never touched.
//!
//! ```
//! use keyed_data::build_keyed_data_default;
//! use serde_json::json;
//!
//! let input = json!({ "foo": { "name": "Foo" } });
//! let out = build_keyed_data_default(input.as_object().unwrap()).unwrap();
//! assert_eq!(out["foo"], json!({ "name": "Foo", "id": "foo" }));
//! ```

pub mod core;
pub mod mapping;

pub use crate::core::error::{KeyedDataError, Result};
pub use crate::core::keyed::{
    build_keyed_data, build_keyed_data_default, keyed_record, verify_keyed,
};
pub use crate::core::options::{KeyedOptions, NonObjectPolicy, DEFAULT_IDENTIFIER_FIELD};
pub use crate::core::typed::{Keyed, KeyedDataBuilder};
pub use crate::mapping::generator::{options_from_toon, KeyedTable};
