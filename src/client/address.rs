//! Algorand address handling
//!
//! An address is the RFC 4648 base32 encoding (no padding) of a 32-byte
//! public key followed by a 4-byte checksum: the last four bytes of the
//! SHA-512/256 digest of the public key. Encoded length is always 58.

use crate::errors::{ClientError, ClientResult};
use multibase::Base;
use sha2::{Digest, Sha512_256};

pub const ADDRESS_LENGTH: usize = 58;
const PUBLIC_KEY_LENGTH: usize = 32;
const CHECKSUM_LENGTH: usize = 4;

/// Trim whitespace and upper-case for validation
pub fn normalize_address(address: &str) -> String {
    address.trim().to_uppercase()
}

/// Normalise and validate an address, returning the normalised form
///
/// # Examples
/// ```
/// use algorand_reputation::client::validate_address;
///
/// let zero = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAY5HFKQ";
/// assert_eq!(validate_address(&zero.to_lowercase()).unwrap(), zero);
/// assert!(validate_address("not-an-address").is_err());
/// ```
pub fn validate_address(address: &str) -> ClientResult<String> {
    let invalid = |reason: String| ClientError::InvalidAddress {
        address: address.to_string(),
        reason,
    };

    let normalized = normalize_address(address);
    if normalized.len() != ADDRESS_LENGTH {
        return Err(invalid(format!(
            "expected {} characters, got {}",
            ADDRESS_LENGTH,
            normalized.len()
        )));
    }

    let bytes = Base::Base32Upper
        .decode(&normalized)
        .map_err(|e| invalid(format!("not valid base32: {}", e)))?;
    if bytes.len() != PUBLIC_KEY_LENGTH + CHECKSUM_LENGTH {
        return Err(invalid(format!("decoded to {} bytes", bytes.len())));
    }

    let (public_key, checksum) = bytes.split_at(PUBLIC_KEY_LENGTH);
    if checksum != address_checksum(public_key).as_slice() {
        return Err(invalid("checksum mismatch".to_string()));
    }

    Ok(normalized)
}

/// Encode a public key as an address
pub fn encode_address(public_key: &[u8; PUBLIC_KEY_LENGTH]) -> String {
    let mut bytes = public_key.to_vec();
    bytes.extend_from_slice(&address_checksum(public_key));
    Base::Base32Upper.encode(bytes)
}

fn address_checksum(public_key: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha512_256::digest(public_key);
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LENGTH..]);
    checksum
}
