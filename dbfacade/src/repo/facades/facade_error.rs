use crate::{engine, params, types};

#[derive(thiserror::Error, Debug)]
pub enum FacadeError {
    #[error("bad handle :: {0}")]
    BadHandle(#[from] types::HandleError),
    #[error("collection `{0}` not found")]
    CollectionNotFound(String),
    #[error("engine error :: {0}")]
    EngineError(#[from] engine::Error),
}

impl FacadeError {
    /// Numeric error code, as reported by the storage engine for the same condition
    pub fn error_num(&self) -> Option<i32> {
        match self {
            Self::BadHandle(e) => Some(e.error_num()),
            Self::CollectionNotFound(_) => Some(params::codes::DATA_SOURCE_NOT_FOUND),
            Self::EngineError(e) => e.error_num(),
        }
    }
}
