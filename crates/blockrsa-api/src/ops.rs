//! The five textual operations
//!
//! Each operation decodes its Base64 arguments, parses the key, runs the
//! core transform, and re-encodes the result. Decoded private-key buffers
//! are wiped by [`blockrsa_crypto::decode_private_key`] on every exit path.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use blockrsa_crypto::{RsaPrivateKey, RsaPublicKey, keys, signing, transform};

use crate::error::ApiError;

/// Encrypt a UTF-8 message under a Base64 DER public key.
///
/// Returns the Base64-encoded ciphertext. Arbitrary message lengths are
/// supported via block chunking; an empty message yields an empty
/// ciphertext.
pub fn encrypt(text: &str, public_key: &str) -> Result<String, ApiError> {
    let key = load_public_key(public_key)?;
    let ciphertext = transform::encrypt(text.as_bytes(), &key)?;
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt Base64 ciphertext under a Base64 DER private key.
///
/// Returns the recovered plaintext as UTF-8 text.
pub fn decrypt(ciphertext: &str, private_key: &str) -> Result<String, ApiError> {
    let raw = decode_b64("txt", ciphertext)?;
    let key = load_private_key(private_key)?;
    let plaintext = transform::decrypt(&raw, &key)?;
    String::from_utf8(plaintext).map_err(|_| ApiError::Utf8)
}

/// Decrypt Base64 ciphertext under a Base64 DER *public* key.
///
/// See [`blockrsa_crypto::decrypt_with_public_key`] for what this
/// non-standard operation does and does not promise.
pub fn decrypt_with_public_key(ciphertext: &str, public_key: &str) -> Result<String, ApiError> {
    let raw = decode_b64("txt", ciphertext)?;
    let key = load_public_key(public_key)?;
    let plaintext = transform::decrypt_with_public_key(&raw, &key)?;
    String::from_utf8(plaintext).map_err(|_| ApiError::Utf8)
}

/// Sign a UTF-8 message (SHA-1 with RSA) under a Base64 DER private key.
///
/// Returns the Base64-encoded signature.
pub fn sign(text: &str, private_key: &str) -> Result<String, ApiError> {
    let key = load_private_key(private_key)?;
    let signature = signing::sign(text.as_bytes(), &key)?;
    Ok(STANDARD.encode(signature))
}

/// Verify a Base64 signature over a UTF-8 message.
///
/// A mismatch is `Ok(false)`; errors are structural (bad Base64, malformed
/// key, wrong signature length).
pub fn verify(text: &str, signature: &str, public_key: &str) -> Result<bool, ApiError> {
    let raw = decode_b64("signature", signature)?;
    let key = load_public_key(public_key)?;
    Ok(signing::verify(text.as_bytes(), &raw, &key)?)
}

fn decode_b64(field: &'static str, text: &str) -> Result<Vec<u8>, ApiError> {
    STANDARD
        .decode(text)
        .map_err(|e| ApiError::Encoding { field, reason: e.to_string() })
}

fn load_public_key(b64: &str) -> Result<RsaPublicKey, ApiError> {
    let der = decode_b64("publicKey", b64)?;
    Ok(keys::decode_public_key(&der)?)
}

fn load_private_key(b64: &str) -> Result<RsaPrivateKey, ApiError> {
    let mut der = decode_b64("privateKey", b64)?;
    Ok(keys::decode_private_key(&mut der)?)
}
