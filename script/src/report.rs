//! User facing messages for a conversion outcome

use std::io::{self, Write};

use serde_json::Value;
use wormhole_recipient_lib::{Bytes32Address, RecipientConversion};

use crate::convert::ConvertError;

pub const GUIDANCE_LINE: &str =
    "Please double-check the Solana address or ensure it's a valid 32-byte public key when decoded.";

pub fn success_message(bytes32: &Bytes32Address) -> String {
    format!(
        "Update your Solidity script. Replace YOUR_SOLANA_RECIPIENT_ADDRESS_AS_BYTES32 with: {}",
        bytes32
    )
}

/// Two lines: the observed length followed by the fixed guidance line
pub fn wrong_length_message(len: usize) -> String {
    format!(
        "Error: Decoded address is {} bytes long, but Wormhole expects a 32-byte address for Solana.\n{}",
        len, GUIDANCE_LINE
    )
}

pub fn invalid_encoding_message(address: &str, err: &bs58::decode::Error) -> String {
    format!("Error: '{}' is not a valid base58 string: {}", address, err)
}

pub fn error_message(address: &str, err: &ConvertError) -> String {
    match err {
        ConvertError::InvalidEncoding(e) => invalid_encoding_message(address, e),
        ConvertError::WrongLength { len } => wrong_length_message(*len),
    }
}

/// Write the message matching `result`, one line per message line
pub fn write_report<W: Write>(
    out: &mut W,
    address: &str,
    result: &Result<Bytes32Address, ConvertError>,
) -> io::Result<()> {
    match result {
        Ok(bytes32) => writeln!(out, "{}", success_message(bytes32)),
        Err(err) => writeln!(out, "{}", error_message(address, err)),
    }
}

/// Print the outcome: invalid input goes to `err`, every other outcome to `out`.
///
/// With `json` set, only a successful conversion is rendered as JSON; a length
/// mismatch still gets the plain two-line report.
pub fn emit<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    address: &str,
    result: &Result<Bytes32Address, ConvertError>,
    json: bool,
) -> io::Result<()> {
    match result {
        Ok(bytes32) if json => {
            let value = json_report(address, bytes32)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)
        }
        Err(ConvertError::InvalidEncoding(_)) => write_report(err, address, result),
        _ => write_report(out, address, result),
    }
}

/// Process exit code; a length mismatch only fails under `strict`
pub fn exit_code(result: &Result<Bytes32Address, ConvertError>, strict: bool) -> i32 {
    match result {
        Ok(_) => 0,
        Err(ConvertError::WrongLength { .. }) if strict => 1,
        Err(ConvertError::WrongLength { .. }) => 0,
        Err(ConvertError::InvalidEncoding(_)) => 1,
    }
}

pub fn json_report(address: &str, bytes32: &Bytes32Address) -> serde_json::Result<Value> {
    let conversion = RecipientConversion {
        address: address.to_string(),
        bytes32: *bytes32,
    };
    serde_json::to_value(&conversion)
}
