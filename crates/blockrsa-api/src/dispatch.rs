//! Method-call surface compatible with the legacy channel contract
//!
//! Embedding hosts deliver calls by method name with loosely typed, possibly
//! absent string arguments. [`MethodCall`] models that surface (method names
//! and argument keys match the original channel), and [`dispatch`] runs the
//! call, collapsing every failure into the fixed category label plus a
//! per-operation message. Callers who want error causes use [`crate::ops`]
//! directly.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::ops;

/// A decoded method call with its optional string arguments.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MethodCall {
    /// Encrypt `txt` under `publicKey`
    Encrypt {
        /// Plaintext message
        txt: Option<String>,
        /// Base64 DER public key
        public_key: Option<String>,
    },
    /// Decrypt `txt` under `privateKey`
    Decrypt {
        /// Base64 ciphertext
        txt: Option<String>,
        /// Base64 DER private key
        private_key: Option<String>,
    },
    /// Sign `plainText` under `privateKey`
    Sign {
        /// Message to sign
        plain_text: Option<String>,
        /// Base64 DER private key
        private_key: Option<String>,
    },
    /// Verify `signature` over `plainText` under `publicKey`
    Verify {
        /// Signed message
        plain_text: Option<String>,
        /// Base64 signature
        signature: Option<String>,
        /// Base64 DER public key
        public_key: Option<String>,
    },
    /// Decrypt `plainText` under `publicKey` (non-standard, see
    /// [`crate::ops::decrypt_with_public_key`])
    DecryptWithPublicKey {
        /// Base64 ciphertext
        plain_text: Option<String>,
        /// Base64 DER public key
        public_key: Option<String>,
    },
}

/// Outcome of a dispatched call, serializable for an embedding host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CallResult {
    /// The operation succeeded; `verify` reports `"true"` / `"false"`
    Success {
        /// Operation output
        value: String,
    },
    /// The operation failed; detail is collapsed to the category label
    Error {
        /// Fixed category label (`NULL INPUT STRING` or `UNAVAILABLE`)
        code: &'static str,
        /// Per-operation failure message
        message: String,
    },
}

/// Run a method call, mapping every failure to its boundary shape.
pub fn dispatch(call: &MethodCall) -> CallResult {
    match call {
        MethodCall::Encrypt { txt, public_key } => {
            finish("Encrypt", require("txt", txt).and_then(|text| {
                ops::encrypt(text, require("publicKey", public_key)?)
            }))
        },
        MethodCall::Decrypt { txt, private_key } => {
            finish("Decrypt", require("txt", txt).and_then(|text| {
                ops::decrypt(text, require("privateKey", private_key)?)
            }))
        },
        MethodCall::Sign { plain_text, private_key } => {
            finish("Sign", require("plainText", plain_text).and_then(|text| {
                ops::sign(text, require("privateKey", private_key)?)
            }))
        },
        MethodCall::Verify { plain_text, signature, public_key } => {
            finish("Verify", require("plainText", plain_text).and_then(|text| {
                let verified = ops::verify(
                    text,
                    require("signature", signature)?,
                    require("publicKey", public_key)?,
                )?;
                Ok(verified.to_string())
            }))
        },
        MethodCall::DecryptWithPublicKey { plain_text, public_key } => {
            finish("Decrypt", require("plainText", plain_text).and_then(|text| {
                ops::decrypt_with_public_key(text, require("publicKey", public_key)?)
            }))
        },
    }
}

fn require<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ApiError> {
    value.as_deref().ok_or(ApiError::Input { field })
}

fn finish(op: &'static str, outcome: Result<String, ApiError>) -> CallResult {
    match outcome {
        Ok(value) => CallResult::Success { value },
        Err(err) => {
            tracing::warn!(%err, op, "method call failed");
            CallResult::Error { code: err.category().label(), message: format!("{op} failure.") }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_reports_null_input() {
        let call = MethodCall::Encrypt { txt: Some("hello".to_string()), public_key: None };
        let result = dispatch(&call);
        assert_eq!(
            result,
            CallResult::Error {
                code: "NULL INPUT STRING",
                message: "Encrypt failure.".to_string()
            }
        );
    }

    #[test]
    fn bad_key_reports_unavailable() {
        let call = MethodCall::Sign {
            plain_text: Some("hello".to_string()),
            private_key: Some("AAAA".to_string()),
        };
        let result = dispatch(&call);
        assert_eq!(
            result,
            CallResult::Error { code: "UNAVAILABLE", message: "Sign failure.".to_string() }
        );
    }

    #[test]
    fn public_key_decrypt_reports_decrypt_failure() {
        let call = MethodCall::DecryptWithPublicKey { plain_text: None, public_key: None };
        let result = dispatch(&call);
        assert_eq!(
            result,
            CallResult::Error {
                code: "NULL INPUT STRING",
                message: "Decrypt failure.".to_string()
            }
        );
    }

    #[test]
    fn method_names_match_the_channel_contract() {
        let call: MethodCall = serde_json::from_str(
            r#"{"method": "decryptWithPublicKey", "plainText": "AA==", "publicKey": "BB=="}"#,
        )
        .unwrap();
        assert!(matches!(call, MethodCall::DecryptWithPublicKey { .. }));
    }

    #[test]
    fn call_result_serializes_with_status_tag() {
        let result = CallResult::Success { value: "true".to_string() };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"status":"success","value":"true"}"#);
    }
}
