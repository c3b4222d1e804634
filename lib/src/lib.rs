use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Size of a Solana (Ed25519) public key and of a Wormhole generic address slot
pub const BYTES32_LEN: usize = 32;

/// A 32-byte recipient address as expected by Wormhole for Solana.
///
/// `Display` renders the Solidity `bytes32` literal, i.e. `0x` followed by
/// 64 lowercase hex digits. The alternate form (`{:#}`) drops the prefix.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bytes32Address(pub [u8; BYTES32_LEN]);

impl Bytes32Address {
    pub fn as_bytes(&self) -> &[u8; BYTES32_LEN] {
        &self.0
    }

    /// Re-encode the raw key as a Solana base58 address
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }
}

impl From<[u8; BYTES32_LEN]> for Bytes32Address {
    fn from(bytes: [u8; BYTES32_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Bytes32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes32Address({})", self)
    }
}

impl fmt::Display for Bytes32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = hex::encode(self.0);

        if f.alternate() {
            write!(f, "{}", hex)
        } else {
            write!(f, "0x{}", hex)
        }
    }
}

impl FromStr for Bytes32Address {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        let bytes = hex::decode(s)?;

        if bytes.len() != BYTES32_LEN {
            return Err(hex::FromHexError::InvalidStringLength);
        }

        let mut array = [0u8; BYTES32_LEN];
        array.copy_from_slice(&bytes);
        Ok(Self(array))
    }
}

impl Serialize for Bytes32Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bytes32Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Result of converting one Solana address into its bytes32 form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientConversion {
    /// The base58 address that was converted
    pub address: String,
    /// The recipient slot value to paste into the Solidity script
    pub bytes32: Bytes32Address,
}
