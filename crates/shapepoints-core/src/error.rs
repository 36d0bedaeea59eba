//! Error handling for shape conversion
//!
//! All conversion entry points fail synchronously and whole: a malformed
//! path data string fails the entire parse rather than returning a
//! truncated point list.

use thiserror::Error;

/// Conversion error type
///
/// Covers every failure the conversion entry points can detect. Callers that
/// need graceful degradation are expected to validate shape descriptors
/// before converting them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Shape descriptor `type` is not in the recognized set
    #[error("unsupported shape type: {shape_type}")]
    UnsupportedShapeType {
        /// The descriptor type that was rejected.
        shape_type: String,
    },

    /// Unrecognized path command letter, or a parameter run whose length is
    /// not divisible by the command's arity
    #[error("malformed path command: {reason}")]
    MalformedPathCommand {
        /// What made the command invalid.
        reason: String,
    },

    /// A coordinate attribute needed by a primitive generator is absent
    #[error("missing required attribute `{attribute}` on `{shape}` shape")]
    MissingRequiredAttribute {
        /// The shape type the attribute belongs to.
        shape: String,
        /// The absent attribute name.
        attribute: String,
    },
}

/// Convenience result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
