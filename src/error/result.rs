//! Result type alias for sdprep operations.

use super::sd_error::SdError;

/// Type alias for Results using SdError.
pub type SdResult<T> = Result<T, SdError>;
