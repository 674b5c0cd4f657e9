//! Result type alias for Shardprep
//!
//! This module provides a convenient Result type alias that uses SplitError
//! as the error type.

use super::errors::SplitError;

/// Result type alias for Shardprep operations
///
/// This is a convenience type alias that uses `SplitError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use shardprep::domain::result::Result;
/// use shardprep::domain::errors::SplitError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SplitError::InvalidArgument("bus count must be at least 1".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SplitError>;
