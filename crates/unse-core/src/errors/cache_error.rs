//! Cache backend errors. Callers treat every one of these as a miss.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CacheError {
    #[error("cache backend failure: {reason}")]
    Backend { reason: String },

    #[error("cached value could not be decoded: {reason}")]
    Decode { reason: String },
}

impl ErrorCode for CacheError {
    fn error_code(&self) -> &'static str {
        error_code::CACHE_BACKEND_ERROR
    }
}
