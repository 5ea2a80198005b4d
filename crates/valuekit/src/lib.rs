//! valuekit: typed null-check, equality, fallback, and field-access
//! helpers for dynamic values.
//!
//! Callers hand every function a [`Value`] together with a free-form kind
//! tag ("number", "text", "json-object", ...); the tag is canonicalized
//! into the closed [`Kind`] set and selects which rule set applies. Each
//! kind defines its own notion of absence (an empty string is null text,
//! an empty array is a null array, a zero-key object is a null object)
//! and the predicates, comparators, and fallback configurators all build
//! on that.
//!
//! Nothing in this crate panics or returns an error from the core
//! operations: malformed input is absorbed and reported as "null" (for
//! checks), "not equal" (for comparisons), or the caller's default (for
//! accessors), with a `tracing` debug event where a fault was swallowed.
//!
//! # Example
//!
//! ```
//! use valuekit::json::array::{sort_by_field, SortOptions};
//! use valuekit::{universal, Value};
//!
//! let records = vec![
//!     Value::from(serde_json::json!({"name": "Select All"})),
//!     Value::from(serde_json::json!({"name": "Beta"})),
//!     Value::from(serde_json::json!({"name": "Alpha"})),
//! ];
//!
//! let options = SortOptions { pin_to_top: true, ..SortOptions::default() };
//! let sorted = sort_by_field(&records, "name", "text", &options);
//! assert_eq!(sorted[0], Value::from(serde_json::json!({"name": "Select All"})));
//!
//! assert!(universal::is_null(&Value::from(""), "text", None));
//! ```

pub mod any;
pub mod array;
pub mod boolean;
pub mod date;
pub mod error;
pub mod json;
pub mod kind;
pub mod number;
pub mod text;
pub mod universal;
pub mod value;

// Re-exports for convenience
pub use error::ValueError;
pub use json::array::{sort_by_field, SortOptions};
pub use kind::Kind;
pub use value::{Map, Value};
