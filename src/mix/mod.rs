//! Prototype mixins over dynamic records.
//!
//! A **mix** exposes the entries of an open-ended record as if they were its
//! own members. Names resolve case-insensitively against the record, while
//! members declared on the mix itself take precedence.
//!
//! ### Key Components
//!
//! - **[`DynamicRecord`]**: The record contract (exact-key storage, case-insensitive lookup on top)
//! - **[`ExpandoObject`]**: Insertion-ordered record implementation
//! - **[`Prototype`]**: The resolution proxy wrapping a shared record
//! - **[`Mix`]**: Dispatch trait; derived mixes declare members and delegate to a base
//! - **[`MixConfig`]**: Case-folding policy
//!
//! ### Resolution Flow
//!
//! When a caller reads a member through [`Mix::get`]:
//!
//! 1. **Declared members**: the mix, then each base mix, exact name match
//! 2. **Record fallback**: first record key matching the name, ignoring case
//! 3. **Failure**: [`MixError::UnresolvedMember`]
//!
//! Writes through [`Mix::set`] never fail: a matching record key is overwritten
//! in place, keeping its casing, otherwise the name is inserted as given.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod expando;
pub mod function;
pub mod natives;
pub mod prototype;
pub mod record;
pub mod value;

pub use config::{CaseFold, MixConfig};
pub use dispatch::Mix;
pub use error::MixError;
pub use expando::ExpandoObject;
pub use function::{MixFunction, NativeFn};
pub use prototype::Prototype;
pub use record::{DynamicRecord, SharedRecord};
pub use value::{MixNumberType, MixValue};
