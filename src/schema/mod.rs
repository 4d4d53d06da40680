//! The schema document: the portable side of every conversion.
//!
//! A schema document is a flat JSON array of `{ "name", "data" }` objects,
//! one per QR code. Images decode into it and encode back out of it, so it
//! plays the same hub role for both batch directions.
//!
//! # Example
//!
//! ```
//! use qrschema::schema::{io_json, Entry, SchemaDocument};
//!
//! let document = SchemaDocument::from(vec![Entry::new("a.png", "hello")]);
//! let json = io_json::to_json_string(&document).unwrap();
//! assert_eq!(json, r#"[{"name":"a.png","data":"hello"}]"#);
//! ```

pub mod io_json;
mod model;

pub use model::{Entry, SchemaDocument};
