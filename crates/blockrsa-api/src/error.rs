//! Error types for the textual boundary

use blockrsa_crypto::{KeyFormatError, PrimitiveError};
use thiserror::Error;

/// Category labels of the legacy method-channel contract.
///
/// The dispatcher reports failures under exactly these two codes,
/// discarding all further detail. The typed API underneath keeps causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// A required argument was missing from the call
    NullInput,
    /// The operation itself failed, for any reason
    Unavailable,
}

impl FailureCategory {
    /// Wire label for this category.
    pub fn label(self) -> &'static str {
        match self {
            Self::NullInput => "NULL INPUT STRING",
            Self::Unavailable => "UNAVAILABLE",
        }
    }
}

/// Errors from the textual operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required argument was missing, detected before the core runs
    #[error("missing required argument: {field}")]
    Input {
        /// Name of the missing argument
        field: &'static str,
    },

    /// Key bytes did not parse as DER key material
    #[error(transparent)]
    KeyFormat(#[from] KeyFormatError),

    /// The cipher or signature primitive failed
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),

    /// An argument was not valid Base64
    #[error("invalid base64 in {field}: {reason}")]
    Encoding {
        /// Name of the malformed argument
        field: &'static str,
        /// Reason reported by the decoder
        reason: String,
    },

    /// Decrypted bytes were not valid UTF-8 text
    #[error("decrypted bytes are not valid UTF-8")]
    Utf8,
}

impl ApiError {
    /// Collapse this error to its boundary category.
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Input { .. } => FailureCategory::NullInput,
            Self::KeyFormat(_) | Self::Primitive(_) | Self::Encoding { .. } | Self::Utf8 => {
                FailureCategory::Unavailable
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_maps_to_null_input() {
        let err = ApiError::Input { field: "publicKey" };
        assert_eq!(err.category(), FailureCategory::NullInput);
        assert_eq!(err.category().label(), "NULL INPUT STRING");
    }

    #[test]
    fn everything_else_maps_to_unavailable() {
        let err = ApiError::Primitive(PrimitiveError::InvalidPadding);
        assert_eq!(err.category(), FailureCategory::Unavailable);

        let err = ApiError::Encoding { field: "txt", reason: "bad symbol".to_string() };
        assert_eq!(err.category().label(), "UNAVAILABLE");
    }

    #[test]
    fn transparent_errors_keep_their_cause() {
        let err = ApiError::KeyFormat(KeyFormatError::MalformedPublicKey {
            reason: "bad tag".to_string(),
        });
        assert_eq!(err.to_string(), "malformed public key: bad tag");
    }
}
