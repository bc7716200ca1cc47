//! Error types for key decoding and cipher operations

use thiserror::Error;

/// Errors from decoding DER-encoded key material.
#[derive(Debug, Error)]
pub enum KeyFormatError {
    /// X.509 `SubjectPublicKeyInfo` bytes could not be parsed
    #[error("malformed public key: {reason}")]
    MalformedPublicKey {
        /// Reason reported by the DER parser
        reason: String,
    },

    /// PKCS#8 private key bytes could not be parsed
    #[error("malformed private key: {reason}")]
    MalformedPrivateKey {
        /// Reason reported by the DER parser
        reason: String,
    },
}

/// Errors from the cipher and signature primitives.
///
/// A multi-block transform fails as a whole on the first failing block; no
/// partial output is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum PrimitiveError {
    /// The encryption primitive rejected a block
    #[error("encryption failed: {reason}")]
    EncryptionFailed {
        /// Reason reported by the primitive
        reason: String,
    },

    /// The decryption primitive rejected a block (bad padding, wrong key,
    /// block length not equal to the modulus length)
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// Reason reported by the primitive
        reason: String,
    },

    /// A raw-decrypted block did not carry a valid PKCS#1 v1.5
    /// encryption-block structure
    #[error("invalid PKCS#1 v1.5 block in decrypted output")]
    InvalidPadding,

    /// The signing primitive rejected the digest
    #[error("signing failed: {reason}")]
    SigningFailed {
        /// Reason reported by the primitive
        reason: String,
    },

    /// Signature length does not match the key's modulus length.
    /// This is a structural failure, distinct from a mismatched signature
    /// (which verifies as `false`).
    #[error("signature is {actual} bytes, key expects {expected}")]
    SignatureLength {
        /// Modulus length of the verifying key in bytes
        expected: usize,
        /// Length of the supplied signature in bytes
        actual: usize,
    },
}
