//! Textual binding layer over the blockrsa primitives
//!
//! Everything crossing this boundary is text: messages are UTF-8 strings,
//! keys are Base64-encoded DER (standard alphabet, padded), ciphertext and
//! signatures are Base64 both ways. The typed operations in [`ops`] keep
//! full error causes; the [`dispatch`] surface collapses them to the fixed
//! category labels of the legacy method-channel contract.
//!
//! # Example
//!
//! ```no_run
//! # fn demo(public_key_b64: &str, private_key_b64: &str) -> Result<(), blockrsa_api::ApiError> {
//! let ciphertext = blockrsa_api::encrypt("hello world", public_key_b64)?;
//! let plaintext = blockrsa_api::decrypt(&ciphertext, private_key_b64)?;
//! assert_eq!(plaintext, "hello world");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod ops;

pub use dispatch::{CallResult, MethodCall, dispatch};
pub use error::{ApiError, FailureCategory};
pub use ops::{decrypt, decrypt_with_public_key, encrypt, sign, verify};
