//! HS256 compact-token (JWT) signing and verification.
//!
//! Tremendous embed payloads are signed with the account's API key as a
//! symmetric secret, producing the standard three-segment compact form
//! `base64url(header).base64url(claims).base64url(signature)`.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::{CryptoError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Fixed JOSE header for HS256 tokens.
const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Sign a claims object as an HS256 compact token.
///
/// # Arguments
/// * `claims` - JSON-serializable claims payload
/// * `secret` - Symmetric signing key bytes
///
/// # Errors
/// Returns [`CryptoError::Encoding`] if the claims cannot be serialized
/// as JSON.
pub fn encode_hs256<C: Serialize>(claims: &C, secret: &[u8]) -> Result<String> {
    let payload = serde_json::to_vec(claims).map_err(|e| CryptoError::Encoding(e.to_string()))?;

    let mut token = URL_SAFE_NO_PAD.encode(HEADER.as_bytes());
    token.push('.');
    token.push_str(&URL_SAFE_NO_PAD.encode(payload));

    let signature = sign(token.as_bytes(), secret);
    token.push('.');
    token.push_str(&URL_SAFE_NO_PAD.encode(signature));

    Ok(token)
}

/// Verify an HS256 compact token and return its claims.
///
/// The signature is recomputed and compared in constant time.
///
/// # Errors
/// Returns [`CryptoError::Malformed`] if the token is not three
/// base64url segments carrying an HS256 header and JSON claims, or
/// [`CryptoError::SignatureMismatch`] if the signature does not match.
pub fn verify_hs256(token: &str, secret: &[u8]) -> Result<serde_json::Value> {
    let mut segments = token.split('.');
    let (header, payload, signature) = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(h), Some(p), Some(s), None) => (h, p, s),
        _ => {
            return Err(CryptoError::Malformed(
                "expected three dot-separated segments".to_string(),
            ));
        }
    };

    let header_bytes = URL_SAFE_NO_PAD
        .decode(header)
        .map_err(|e| CryptoError::Malformed(format!("header: {e}")))?;
    if header_bytes != HEADER.as_bytes() {
        return Err(CryptoError::Malformed(
            "unsupported token header".to_string(),
        ));
    }

    let signing_input = &token[..header.len() + 1 + payload.len()];
    let expected = URL_SAFE_NO_PAD.encode(sign(signing_input.as_bytes(), secret));
    if !signatures_match(signature.as_bytes(), expected.as_bytes()) {
        return Err(CryptoError::SignatureMismatch);
    }

    let claims = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| CryptoError::Malformed(format!("claims: {e}")))?;
    serde_json::from_slice(&claims).map_err(|e| CryptoError::Malformed(format!("claims: {e}")))
}

/// Compute the raw HMAC-SHA256 signature over a signing input.
fn sign(message: &[u8], secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Compare a presented signature segment against the recomputed one
/// without leaking where they diverge. Length is not secret.
fn signatures_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented.ct_eq(expected).into()
}
