//! The block-chunked cipher transforms
//!
//! All three transforms share one driver, [`apply_blocks`]: walk the input
//! in `min(block_size, remaining)` slices, run the primitive once per slice,
//! and concatenate the raw per-block outputs. The output is exactly the sum
//! of what the primitive produced; a short final block never leaves slack in
//! the result.
//!
//! Every call constructs its own primitive state (including the RNG handle
//! for encryption); nothing is shared between invocations.

use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

use crate::error::PrimitiveError;
use crate::keys;

/// Minimum PKCS#1 v1.5 padding-string length in bytes
const MIN_PAD_LEN: usize = 8;

/// Encrypt a plaintext of arbitrary length under PKCS#1 v1.5.
///
/// The plaintext is split into chunks of at most
/// [`keys::max_plaintext_len`] bytes; each chunk encrypts to one
/// modulus-length ciphertext block. Empty input produces empty output
/// (zero blocks).
///
/// Padding is randomized, so repeated calls on the same input differ.
///
/// # Errors
///
/// - `EncryptionFailed`: the primitive rejected a block; no partial output
pub fn encrypt(plaintext: &[u8], key: &RsaPublicKey) -> Result<Vec<u8>, PrimitiveError> {
    let chunk_size = keys::max_plaintext_len(key);
    if chunk_size == 0 {
        return Err(PrimitiveError::EncryptionFailed {
            reason: "modulus too small for PKCS#1 v1.5 padding".to_string(),
        });
    }

    let mut rng = rand::thread_rng();
    apply_blocks(plaintext, chunk_size, keys::modulus_len(key), |chunk| {
        key.encrypt(&mut rng, Pkcs1v15Encrypt, chunk)
            .map_err(|e| PrimitiveError::EncryptionFailed { reason: e.to_string() })
    })
}

/// Decrypt a ciphertext with a private key.
///
/// The ciphertext is split into modulus-length blocks. Only the final block
/// may be short (the `min(block_size, remaining)` rule); the primitive then
/// rejects it, which surfaces as `DecryptionFailed` rather than silent
/// truncation.
///
/// # Errors
///
/// - `DecryptionFailed`: bad padding, wrong key, or a misaligned block;
///   no partial output
pub fn decrypt(ciphertext: &[u8], key: &RsaPrivateKey) -> Result<Vec<u8>, PrimitiveError> {
    let block_size = keys::modulus_len(key);
    apply_blocks(ciphertext, block_size, block_size, |block| {
        key.decrypt(Pkcs1v15Encrypt, block)
            .map_err(|e| PrimitiveError::DecryptionFailed { reason: e.to_string() })
    })
}

/// Decrypt a ciphertext with a *public* key.
///
/// Runs the raw public RSA operation (`c^e mod n`) on each modulus-length
/// block and strips the PKCS#1 v1.5 encryption-block structure from the
/// result, accepting block types 01 and 02. This only recovers meaningful
/// plaintext when the producer applied the private key's raw operation to a
/// padded block; it is an interoperability mechanism, not a standard RSA
/// mode, and no security property is claimed for it.
///
/// # Errors
///
/// - `DecryptionFailed`: a block does not represent a value below the
///   modulus
/// - `InvalidPadding`: the recovered block has no valid PKCS#1 v1.5
///   structure
pub fn decrypt_with_public_key(
    ciphertext: &[u8],
    key: &RsaPublicKey,
) -> Result<Vec<u8>, PrimitiveError> {
    let block_size = keys::modulus_len(key);
    apply_blocks(ciphertext, block_size, block_size, |block| public_block_decrypt(key, block))
}

/// Drive a fixed-block primitive over `input`.
///
/// Issues `ceil(input.len() / in_block)` calls; block `i` covers
/// `input[i * in_block ..]` for `min(in_block, remaining)` bytes. Output is
/// the exact concatenation of per-block results, reserved at
/// `blocks * out_block` up front. The first failing block aborts the whole
/// transform.
fn apply_blocks<F>(
    input: &[u8],
    in_block: usize,
    out_block: usize,
    mut op: F,
) -> Result<Vec<u8>, PrimitiveError>
where
    F: FnMut(&[u8]) -> Result<Vec<u8>, PrimitiveError>,
{
    let blocks = input.len().div_ceil(in_block);
    let mut output = Vec::with_capacity(blocks * out_block);

    for i in 0..blocks {
        let offset = i * in_block;
        let len = usize::min(in_block, input.len() - offset);
        let transformed = op(&input[offset..offset + len])?;
        output.extend_from_slice(&transformed);
    }

    Ok(output)
}

/// Raw public operation plus PKCS#1 v1.5 unpadding for one block.
fn public_block_decrypt(key: &RsaPublicKey, block: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    let c = BigUint::from_bytes_be(block);
    if &c >= key.n() {
        return Err(PrimitiveError::DecryptionFailed {
            reason: "ciphertext block not below modulus".to_string(),
        });
    }

    let em = left_pad(&c.modpow(key.e(), key.n()).to_bytes_be(), key.size());
    strip_pkcs1v15(&em)
}

/// Left-pad `bytes` with zeros to `size`.
///
/// `bytes` comes from a value below the modulus, so it never exceeds `size`.
fn left_pad(bytes: &[u8], size: usize) -> Vec<u8> {
    let mut padded = vec![0u8; size];
    padded[size - bytes.len()..].copy_from_slice(bytes);
    padded
}

/// Strip a PKCS#1 v1.5 encryption block: `0x00 || BT || PS || 0x00 || D`.
///
/// Block type 01 (all-0xFF padding, produced by a private-key operation) and
/// 02 (random nonzero padding) are both accepted; the padding string must be
/// at least 8 bytes.
fn strip_pkcs1v15(em: &[u8]) -> Result<Vec<u8>, PrimitiveError> {
    if em.len() < keys::PKCS1V15_OVERHEAD || em[0] != 0x00 || !matches!(em[1], 0x01 | 0x02) {
        return Err(PrimitiveError::InvalidPadding);
    }

    let pad_len = em[2..]
        .iter()
        .position(|&b| b == 0x00)
        .ok_or(PrimitiveError::InvalidPadding)?;
    if pad_len < MIN_PAD_LEN {
        return Err(PrimitiveError::InvalidPadding);
    }

    Ok(em[pad_len + 3..].to_vec())
}
