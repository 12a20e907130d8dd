//! # Facade Module
//!
//! This module implements the **Facade** pattern, serving as the logic layer between
//! the callers of a [`crate::Database`] and the engines it delegates to.
//!
//! Callers hand over loosely shaped input (names or handles, raw handle strings or
//! index objects, text or query builders); the facades resolve it once into a
//! canonical form, validate what can be validated locally and forward the rest.
//!
//! * **Handle resolution:** [`FacadeIndex`] parses index handles and looks them up
//!   against the live index list of their collection.
//! * **Idempotent lifecycle:** [`FacadeCollection`] drops and truncates collections,
//!   treating an absent collection as nothing to do.
//! * **Request shaping:** [`FacadeQuery`] and [`FacadeTransaction`] build the payloads
//!   the query and transaction engines receive, without touching caller data.

mod facade_error;
pub use facade_error::*;

mod facade_index;
pub use facade_index::*;

mod facade_collection;
pub use facade_collection::*;

mod facade_query;
pub use facade_query::*;

mod facade_transaction;
pub use facade_transaction::*;
