//! Result type alias for logferry
//!
//! This module provides a convenient Result type alias that uses FerryError
//! as the error type.

use super::errors::FerryError;

/// Result type alias for logferry operations
///
/// # Examples
///
/// ```
/// use logferry::domain::result::Result;
/// use logferry::domain::errors::FerryError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(FerryError::Export("stream vanished".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, FerryError>;
