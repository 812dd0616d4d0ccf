//! Webhook signature verification
//!
//! LINE signs each webhook body with HMAC-SHA256 keyed by the channel
//! secret and sends the base64 digest in `x-line-signature`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header carrying the body signature
pub const SIGNATURE_HEADER: &str = "x-line-signature";

type HmacSha256 = Hmac<Sha256>;

/// Compute the base64 signature of `body`
pub fn sign(channel_secret: &str, body: &[u8]) -> Option<String> {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes()).ok()?;
    mac.update(body);
    Some(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Check `signature` against the body, in constant time
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let expected = match STANDARD.decode(signature.trim()) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };

    let mut mac = match HmacSha256::new_from_slice(channel_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return false,
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
