//! # Query Requests
//!
//! Everything needed to turn a caller's query call into the single canonical
//! [`QueryPayload`] the query engine accepts.
//!
//! -   [`QuerySource`]: what the query text comes from. Raw text, a query builder,
//!     or a payload that was already assembled by the caller.
//! -   [`QueryRequest`]: the explicit request, with named optional bind variables,
//!     cursor options and query options.
//! -   [`legacy`]: the positional call shapes `(query, bindVars, cursorOptions, options)`
//!     and `(query, bindVars, options)`, mapped onto a [`QueryRequest`].
//! -   [`Statement`]: a payload bound to an engine, ready to run.
//!
//! Normalization never fails. Query text that is not a string is kept as-is and
//! left to the engine to reject.

mod payload;
pub use payload::*;

mod request;
pub use request::*;

pub mod legacy;

mod statement;
pub use statement::*;
