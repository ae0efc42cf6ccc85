//! Request signing for the PayStage gateway
//!
//! Every request carries `X-GATEWAY-SECRET`, the hex HMAC-SHA256 of the public key
//! followed by the merchant reference number, keyed with the secret key.

use crate::error::{GatewayError, GatewayResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the lower-case hex digest for one request.
///
/// `reference_no` must be the exact reference number sent in the request body,
/// otherwise the gateway rejects the signature.
pub fn generate_digest(
    public_key: &str,
    secret_key: &str,
    reference_no: &str,
) -> GatewayResult<String> {
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .map_err(|e| GatewayError::signature(e.to_string()))?;

    mac.update(public_key.as_bytes());
    mac.update(reference_no.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}
