//! Conversion of a Solana base58 address into a Wormhole bytes32 recipient.

use thiserror::Error;
use tracing::{debug, warn};
use wormhole_recipient_lib::{Bytes32Address, BYTES32_LEN};

use crate::utils::{base58_decode, to_array32};

/// Recipient address baked into the bridge script
pub const DEFAULT_SOLANA_ADDRESS: &str = "EhDUmmxeFwNYtKPw5swPqshVLRoJmzvbkxcnSLGcybBW";

/// Why an address could not be turned into a bytes32 recipient
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input is not valid base58
    #[error("invalid base58 encoding: {0}")]
    InvalidEncoding(#[source] bs58::decode::Error),

    /// Valid base58, but it does not decode to a 32-byte public key
    #[error("decoded address is {len} bytes long, expected {}", BYTES32_LEN)]
    WrongLength { len: usize },
}

impl ConvertError {
    /// Whether this is the recognized length mismatch outcome rather than malformed input
    pub fn is_wrong_length(&self) -> bool {
        matches!(self, ConvertError::WrongLength { .. })
    }
}

/// Decode a base58 address, tagging malformed input as `InvalidEncoding`
pub fn decode_address(address: &str) -> Result<Vec<u8>, ConvertError> {
    base58_decode(address).map_err(ConvertError::InvalidEncoding)
}

/// Wrap already decoded bytes, rejecting anything but exactly 32 of them
pub fn bytes_to_bytes32(bytes: &[u8]) -> Result<Bytes32Address, ConvertError> {
    to_array32(bytes)
        .map(Bytes32Address::from)
        .ok_or(ConvertError::WrongLength { len: bytes.len() })
}

/// Convert a base58 Solana address into the bytes32 value Wormhole expects.
///
/// Pure and deterministic; printing the outcome is left to the caller.
pub fn convert(address: &str) -> Result<Bytes32Address, ConvertError> {
    let bytes = decode_address(address)?;
    debug!(address, len = bytes.len(), "decoded base58 address");

    let result = bytes_to_bytes32(&bytes);
    if let Err(ConvertError::WrongLength { len }) = &result {
        warn!(address, len, "decoded address is not {} bytes", BYTES32_LEN);
    }
    result
}
