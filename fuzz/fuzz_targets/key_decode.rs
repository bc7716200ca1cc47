//! Fuzz target for DER key parsing
//!
//! # Invariants
//!
//! - NEVER panic on malformed DER
//! - Private-key input buffers are zeroed on every exit path

#![no_main]

use blockrsa_crypto::keys;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = keys::decode_public_key(data);

    let mut buffer = data.to_vec();
    let _ = keys::decode_private_key(&mut buffer);
    assert!(buffer.iter().all(|&b| b == 0), "key buffer must be wiped");
});
