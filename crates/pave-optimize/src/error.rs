use pave_core::ParamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error("{what} range is empty: {min}..={max}")]
    EmptyRange {
        what: &'static str,
        min:  u32,
        max:  u32,
    },

    #[error("base parameters are invalid: {0}")]
    InvalidBase(#[from] ParamError),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;
