use crate::params;

/// Failures reported by the storage, query or transaction engine.
///
/// The facade never interprets these beyond [`Error::DataSourceNotFound`],
/// which collection drops tolerate.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("collection or view not found: {0}")]
    DataSourceNotFound(String),
    #[error("engine error {code}: {message}")]
    Engine { code: i32, message: String },
    /// A value raised by user code running inside the engine (e.g. a transaction body)
    #[error("raised by user code: {0}")]
    Thrown(serde_json::Value),
}

impl Error {
    pub fn engine(code: i32, message: impl Into<String>) -> Self {
        Self::Engine {
            code,
            message: message.into(),
        }
    }

    pub fn error_num(&self) -> Option<i32> {
        match self {
            Self::DataSourceNotFound(_) => Some(params::codes::DATA_SOURCE_NOT_FOUND),
            Self::Engine { code, .. } => Some(*code),
            Self::Thrown(_) => None,
        }
    }

    pub fn is_data_source_not_found(&self) -> bool {
        matches!(self, Self::DataSourceNotFound(_))
            || matches!(self, Self::Engine { code, .. } if *code == params::codes::DATA_SOURCE_NOT_FOUND)
    }
}
