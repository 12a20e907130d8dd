//! Positional call shapes.
//!
//! Older callers pass `(query, bindVars, cursorOptions, options)` to run a query
//! and `(query, bindVars, options)` to explain or profile one. Both shapes are
//! arity sensitive:
//!
//! * when `query` is a pre-built payload, every following argument shifts one
//!   slot to the left (`bindVars` is read as `cursorOptions`, `cursorOptions` as
//!   `options`);
//! * when `options` is missing but `cursorOptions` is given, the cursor options
//!   double as query options.
//!
//! The functions here resolve those rules once and hand back an explicit
//! [`QueryRequest`]. Arguments are borrowed and copied, never modified.

use super::{CursorOptions, QueryRequest, QuerySource};
use crate::utils::truthy;
use log::{debug, trace};
use serde_json::{Map, Value};

/// Maps a positional query call onto a [`QueryRequest`].
pub fn query_request<'a>(
    query: QuerySource<'a>,
    bind_vars: Option<&Value>,
    cursor_options: Option<&Value>,
    options: Option<&Value>,
) -> QueryRequest<'a> {
    let (bind_vars, cursor_options, options) = if query.is_payload() {
        trace!("pre-built payload, shifting positional arguments");
        (None, bind_vars, cursor_options)
    } else {
        (bind_vars, cursor_options, options)
    };

    let options = match options {
        None if cursor_options.is_some() => {
            trace!("no query options, reusing cursor options");
            cursor_options
        }
        other => other,
    };

    QueryRequest {
        source: query,
        bind_vars: bind_vars.cloned(),
        cursor: truthy(cursor_options).map(CursorOptions::from_value),
        options: truthy(options).and_then(copy_object),
    }
}

/// Maps a positional explain or profile call onto a [`QueryRequest`].
///
/// A pre-built payload ignores the remaining arguments.
pub fn analysis_request<'a>(
    query: QuerySource<'a>,
    bind_vars: Option<&Value>,
    options: Option<&Value>,
) -> QueryRequest<'a> {
    if query.is_payload() {
        return QueryRequest::new(query);
    }

    QueryRequest {
        source: query,
        bind_vars: bind_vars.cloned(),
        cursor: None,
        options: truthy(options).and_then(copy_object),
    }
}

fn copy_object(value: &Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map.clone()),
        other => {
            debug!("ignoring non-object query options `{}`", other);
            None
        }
    }
}
