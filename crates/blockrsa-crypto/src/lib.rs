//! Block-chunked RSA primitives
//!
//! RSA is a fixed-block primitive: one invocation consumes at most
//! `modulus_len - 11` plaintext bytes (PKCS#1 v1.5 encryption padding) and
//! produces exactly `modulus_len` ciphertext bytes. This crate drives the
//! primitive over inputs of arbitrary length by splitting them into
//! block-sized chunks, transforming each independently, and concatenating
//! the per-block outputs.
//!
//! ```text
//! plaintext (any length)
//!        │
//!        ▼ split into ≤ (modulus_len - 11) byte chunks
//! chunk[0] .. chunk[n-1]
//!        │
//!        ▼ RSA PKCS#1 v1.5, one call per chunk
//! block[0] .. block[n-1]   (modulus_len bytes each)
//!        │
//!        ▼ concatenate
//! ciphertext
//! ```
//!
//! Signatures are single-shot: [`signing::sign`] digests the whole message
//! with SHA-1 and signs once, so no chunking applies there.
//!
//! # Key Lifecycle
//!
//! Keys arrive as DER bytes (X.509 `SubjectPublicKeyInfo` public, PKCS#8
//! private), are parsed per call, and are dropped after use. No key state is
//! retained between calls. [`keys::decode_private_key`] wipes the caller's
//! decoded key buffer on every exit path; this is best effort, since the
//! parser may have made internal copies before the wipe.
//!
//! # Determinism
//!
//! PKCS#1 v1.5 encryption padding is randomized, so encrypting the same
//! plaintext twice under the same key produces different ciphertext bytes.
//! Both decrypt to the same plaintext. Decryption, signing, and verification
//! are deterministic.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod keys;
pub mod signing;
pub mod transform;

pub use error::{KeyFormatError, PrimitiveError};
pub use keys::{decode_private_key, decode_public_key, max_plaintext_len, modulus_len};
pub use rsa::{RsaPrivateKey, RsaPublicKey};
pub use signing::{sign, verify};
pub use transform::{decrypt, decrypt_with_public_key, encrypt};
