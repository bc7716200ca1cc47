//! Fuzz target for the cipher and signature surface
//!
//! Arbitrary bytes through the chunk driver, the PKCS#1 v1.5 unpadding
//! parser, and signature verification, under a fixed 2048-bit key.
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary ciphertext or signature bytes
//! - Verification of garbage is `false` or a length error, never a crash

#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use blockrsa_crypto::{RsaPrivateKey, decrypt, decrypt_with_public_key, verify};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum CipherAttack {
    PrivateDecrypt { ciphertext: Vec<u8> },
    PublicDecrypt { ciphertext: Vec<u8> },
    Verify { message: Vec<u8>, signature: Vec<u8> },
}

fn fuzz_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("keygen")
    })
}

fuzz_target!(|attack: CipherAttack| {
    let key = fuzz_key();
    match attack {
        CipherAttack::PrivateDecrypt { ciphertext } => {
            let _ = decrypt(&ciphertext, key);
        }
        CipherAttack::PublicDecrypt { ciphertext } => {
            let _ = decrypt_with_public_key(&ciphertext, &key.to_public_key());
        }
        CipherAttack::Verify { message, signature } => {
            let _ = verify(&message, &signature, &key.to_public_key());
        }
    }
});
