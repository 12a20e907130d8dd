//! Composite handles of the form `<collection>/<local-id>`.
//!
//! The same grammar addresses documents (`<collection>/<key>`) and indexes
//! (`<collection>/<index name or id>`); the typed wrappers only differ in how
//! the two parts are named and which error number a malformed handle reports.

use crate::params;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_\-]+)/([A-Za-z0-9_\-]+)$").expect("valid handle regex")
});

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    #[error("invalid document handle `{0}`")]
    BadDocumentHandle(String),
    #[error("invalid index handle `{0}`")]
    BadIndexHandle(String),
}

impl HandleError {
    pub fn error_num(&self) -> i32 {
        match self {
            Self::BadDocumentHandle(_) => params::codes::DOCUMENT_HANDLE_BAD,
            Self::BadIndexHandle(_) => params::codes::INDEX_HANDLE_BAD,
        }
    }

    /// The handle that failed to parse
    pub fn handle(&self) -> &str {
        match self {
            Self::BadDocumentHandle(h) | Self::BadIndexHandle(h) => h,
        }
    }
}

/// The two parts of a well-formed handle, captured verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeHandle {
    pub primary: String,
    pub secondary: String,
}

impl CompositeHandle {
    /// Splits `handle` into its two parts, returns [`None`] if it does not match
    /// the handle grammar.
    pub fn parse(handle: &str) -> Option<Self> {
        let caps = HANDLE_RE.captures(handle)?;
        Some(Self {
            primary: caps[1].to_owned(),
            secondary: caps[2].to_owned(),
        })
    }
}

impl fmt::Display for CompositeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.primary,
            params::HANDLE_SEPARATOR,
            self.secondary
        )
    }
}

/// A document address, `<collection>/<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentHandle {
    pub collection: String,
    pub key: String,
}

impl DocumentHandle {
    pub fn parse(handle: &str) -> Result<Self, HandleError> {
        let CompositeHandle { primary, secondary } = CompositeHandle::parse(handle)
            .ok_or_else(|| HandleError::BadDocumentHandle(handle.to_owned()))?;

        Ok(Self {
            collection: primary,
            key: secondary,
        })
    }
}

impl FromStr for DocumentHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.collection, params::HANDLE_SEPARATOR, self.key)
    }
}

/// An index address, `<collection>/<index>`.
///
/// The local part may be either the index name or the numeric part of its id,
/// so the full handle is kept to compare against index ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndexHandle {
    raw: String,
    pub collection: String,
    pub index: String,
}

impl IndexHandle {
    pub fn parse(handle: &str) -> Result<Self, HandleError> {
        let CompositeHandle { primary, secondary } = CompositeHandle::parse(handle)
            .ok_or_else(|| HandleError::BadIndexHandle(handle.to_owned()))?;

        Ok(Self {
            raw: handle.to_owned(),
            collection: primary,
            index: secondary,
        })
    }

    /// The handle exactly as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for IndexHandle {
    type Err = HandleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IndexHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
