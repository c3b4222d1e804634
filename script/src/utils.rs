use wormhole_recipient_lib::BYTES32_LEN;

/// Decode a base58 string to bytes
pub fn base58_decode(input: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(input).into_vec()
}

/// Copy a decoded key into a fixed 32-byte array, if it has exactly that length
pub fn to_array32(bytes: &[u8]) -> Option<[u8; BYTES32_LEN]> {
    if bytes.len() != BYTES32_LEN {
        return None;
    }
    let mut arr = [0u8; BYTES32_LEN];
    arr.copy_from_slice(bytes);
    Some(arr)
}
