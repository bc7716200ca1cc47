//! DER key decoding and block-size arithmetic
//!
//! Block sizes are always derived from the parsed key's modulus, never
//! hardcoded: a 2048-bit key gives a 256-byte cipher block and a 245-byte
//! maximum plaintext chunk, a 4096-bit key gives 512 and 501.

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroize;

use crate::error::KeyFormatError;

/// PKCS#1 v1.5 encryption padding overhead in bytes:
/// `0x00 || 0x02 || PS (≥ 8 bytes) || 0x00`.
pub const PKCS1V15_OVERHEAD: usize = 11;

/// Decode an X.509 `SubjectPublicKeyInfo` DER buffer into an RSA public key.
///
/// # Errors
///
/// - `MalformedPublicKey`: bytes are not valid SPKI DER or not an RSA key
pub fn decode_public_key(der: &[u8]) -> Result<RsaPublicKey, KeyFormatError> {
    RsaPublicKey::from_public_key_der(der)
        .map_err(|e| KeyFormatError::MalformedPublicKey { reason: e.to_string() })
}

/// Decode a PKCS#8 DER buffer into an RSA private key.
///
/// The buffer is zeroed before this returns, on success and on failure
/// alike. Best effort only: the parser may have copied the material
/// internally before the wipe.
///
/// # Errors
///
/// - `MalformedPrivateKey`: bytes are not valid PKCS#8 DER or not an RSA key
pub fn decode_private_key(der: &mut [u8]) -> Result<RsaPrivateKey, KeyFormatError> {
    let parsed = RsaPrivateKey::from_pkcs8_der(der)
        .map_err(|e| KeyFormatError::MalformedPrivateKey { reason: e.to_string() });
    der.zeroize();
    parsed
}

/// Modulus length in bytes: the cipher's ciphertext block size, and the
/// exact length of every signature under this key.
pub fn modulus_len<K: PublicKeyParts>(key: &K) -> usize {
    key.size()
}

/// Largest plaintext chunk a single PKCS#1 v1.5 encryption call accepts.
///
/// Returns 0 for keys too small to carry the padding overhead; such keys
/// cannot encrypt anything.
pub fn max_plaintext_len<K: PublicKeyParts>(key: &K) -> usize {
    key.size().saturating_sub(PKCS1V15_OVERHEAD)
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
    use rsa::traits::PublicKeyParts;

    use super::*;

    fn test_key() -> &'static RsaPrivateKey {
        static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
        KEY.get_or_init(|| {
            RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap()
        })
    }

    #[test]
    fn public_key_der_roundtrip() {
        let key = test_key();
        let der = key.to_public_key().to_public_key_der().unwrap();
        let decoded = decode_public_key(der.as_bytes()).unwrap();
        assert_eq!(decoded.n(), key.n());
        assert_eq!(decoded.e(), key.e());
    }

    #[test]
    fn private_key_der_roundtrip() {
        let key = test_key();
        let der = key.to_pkcs8_der().unwrap();
        let mut bytes = der.as_bytes().to_vec();
        let decoded = decode_private_key(&mut bytes).unwrap();
        assert_eq!(decoded.n(), key.n());
    }

    #[test]
    fn private_key_buffer_is_wiped() {
        let key = test_key();
        let der = key.to_pkcs8_der().unwrap();
        let mut bytes = der.as_bytes().to_vec();
        decode_private_key(&mut bytes).unwrap();
        assert!(bytes.iter().all(|&b| b == 0), "decoded key bytes must be zeroed");
    }

    #[test]
    fn private_key_buffer_is_wiped_on_failure() {
        let mut garbage = vec![0xABu8; 64];
        let result = decode_private_key(&mut garbage);
        assert!(matches!(result, Err(KeyFormatError::MalformedPrivateKey { .. })));
        assert!(garbage.iter().all(|&b| b == 0), "buffer must be zeroed on failure too");
    }

    #[test]
    fn garbage_public_key_is_rejected() {
        let result = decode_public_key(&[0x30, 0x03, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(KeyFormatError::MalformedPublicKey { .. })));
    }

    #[test]
    fn block_sizes_follow_modulus() {
        let key = test_key().to_public_key();
        assert_eq!(modulus_len(&key), 256);
        assert_eq!(max_plaintext_len(&key), 245);
    }

    #[test]
    fn block_sizes_agree_between_key_halves() {
        let key = test_key();
        assert_eq!(modulus_len(key), modulus_len(&key.to_public_key()));
        assert_eq!(max_plaintext_len(key), max_plaintext_len(&key.to_public_key()));
    }
}
