//! Error types for residual heap inspection

use thiserror::Error;

use crate::value::ObjectId;

/// Internal-consistency failures that abort an inspection pass.
///
/// These indicate a malformed heap snapshot, not a property of the program
/// being serialized. Unsupported-but-recoverable shapes go to the
/// [`Diagnostics`](crate::Diagnostics) sink instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectorError {
    /// Handle not present in the heap snapshot
    #[error("Unknown object handle {0}")]
    UnknownObject(ObjectId),

    /// `arguments`/`caller` rule reached for a native or bound function
    #[error("Invariant violation: `{key}` on function {function} which was not defined by source code")]
    NotSourceFunction {
        /// The offending function
        function: ObjectId,
        /// The property being decided
        key: String,
    },
}

/// A target profile string that names no known runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown compatibility target: {0:?}")]
pub struct ProfileParseError(pub String);

/// Result type alias for inspection operations
pub type Result<T> = std::result::Result<T, InspectorError>;
