//! # protomix - Prototype mixins for Rust
//!
//! Wrap an open-ended key/value record so that its entries behave like members
//! of your own type:
//! - Case-insensitive member resolution over case-preserving storage
//! - Callables stored in the record can be read as values or invoked
//! - Members can be tacked on to a live record at any time
//! - Derived mixes declare their own properties and methods, which win over
//!   record entries of the same name
//!
//! ## Quick Start
//!
//! ```
//! use protomix::mix::{ExpandoObject, Mix, MixValue, Prototype};
//!
//! let blog = ExpandoObject::with_entries(vec![
//!     ("Title", MixValue::from("Some Name")),
//!     ("body", MixValue::from("Some Body")),
//! ])
//! .into_shared();
//!
//! let mix = Prototype::new(blog.clone());
//! assert_eq!(mix.get("title").unwrap(), MixValue::from("Some Name"));
//! assert_eq!(mix.get("Body").unwrap(), MixValue::from("Some Body"));
//!
//! // Writes go to the shared record, keeping the existing key's casing
//! mix.set("TITLE", MixValue::from("Another Title")).unwrap();
//! assert_eq!(mix.get_value_for("Title").unwrap(), MixValue::from("Another Title"));
//!
//! // Unknown names fail on read
//! assert!(mix.get("FooBar").is_err());
//! ```
//!
//! ## Declaring Members
//!
//! A derived mix embeds its parent and overrides the `declared_*` hooks of
//! [`mix::Mix`]. Declared names match exactly and shadow record keys:
//!
//! ```
//! use protomix::mix::{ExpandoObject, Mix, MixError, MixValue, Prototype};
//!
//! struct BlogEntry {
//!     prototype: Prototype,
//! }
//!
//! impl Mix for BlogEntry {
//!     fn prototype(&self) -> &Prototype {
//!         &self.prototype
//!     }
//!
//!     fn declared_names(&self) -> &[&'static str] {
//!         &["Body"]
//!     }
//!
//!     fn declared_get(&self, name: &str) -> Option<Result<MixValue, MixError>> {
//!         match name {
//!             "Body" => Some(Ok(MixValue::from(""))),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let blog = ExpandoObject::with_entries(vec![("Body", MixValue::from("Oak is tight, yo."))])
//!     .into_shared();
//! let entry = BlogEntry { prototype: Prototype::new(blog) };
//! assert_eq!(entry.get("Body").unwrap(), MixValue::from(""));
//! assert_eq!(entry.get_value_for("Body").unwrap(), MixValue::from("Oak is tight, yo."));
//! ```
//!
//! ## Architecture
//!
//! - **[`mix`]** - Records, values, the resolution proxy and member dispatch
//!   - **[`mix::record`]** - Record contract and case-insensitive lookup
//!   - **[`mix::prototype`]** - The resolution proxy and its fallback hooks
//!   - **[`mix::dispatch`]** - Declared-member precedence and delegation chains

pub mod mix;
