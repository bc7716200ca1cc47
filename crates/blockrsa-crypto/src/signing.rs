//! Single-shot SHA-1-with-RSA signatures
//!
//! Signatures digest the whole message internally, so the per-call size
//! limit of the raw cipher does not apply and no chunking happens here. The
//! algorithm pairing is fixed: SHA-1 digest, PKCS#1 v1.5 signature padding.

use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::{Digest, Sha1};

use crate::error::PrimitiveError;

/// Sign a message: SHA-1 digest, then PKCS#1 v1.5 signature padding.
///
/// Returns the raw signature, always exactly the modulus length.
///
/// # Errors
///
/// - `SigningFailed`: the primitive rejected the digest (key too small to
///   carry the `DigestInfo`)
pub fn sign(message: &[u8], key: &RsaPrivateKey) -> Result<Vec<u8>, PrimitiveError> {
    let digest = Sha1::digest(message);
    key.sign(Pkcs1v15Sign::new::<Sha1>(), &digest)
        .map_err(|e| PrimitiveError::SigningFailed { reason: e.to_string() })
}

/// Verify a SHA-1-with-RSA signature over `message`.
///
/// A mismatched signature is a negative answer, not an error: the result is
/// `Ok(false)`. The only error is structural, a signature whose length does
/// not match the key's modulus length.
pub fn verify(
    message: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> Result<bool, PrimitiveError> {
    let expected = key.size();
    if signature.len() != expected {
        return Err(PrimitiveError::SignatureLength { expected, actual: signature.len() });
    }

    let digest = Sha1::digest(message);
    Ok(key.verify(Pkcs1v15Sign::new::<Sha1>(), &digest, signature).is_ok())
}
