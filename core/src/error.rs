use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Owned `serde_json::Value` trees cannot form cycles, so the only runaway
    // traversal left is pathological nesting depth.
    #[error("structure too deep: nesting exceeds {max_depth} levels")]
    StructureTooDeep { max_depth: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
