use assert_matches::assert_matches;
use test_case::test_case;
use wormhole_recipient_lib::Bytes32Address;
use wormhole_recipient_script::{
    convert, report::wrong_length_message, utils::base58_decode, ConvertError,
    DEFAULT_SOLANA_ADDRESS,
};

const GOLDEN_BYTES32: &str = "0xcb7545b2df7c81b581df1000ca9568adf19b13990c6540f3db2a2612b0c633b9";

#[test]
fn golden_address() {
    let bytes32 = convert(DEFAULT_SOLANA_ADDRESS).unwrap();
    assert_eq!(bytes32.to_string(), GOLDEN_BYTES32);
}

#[test_case(DEFAULT_SOLANA_ADDRESS ; "bridge recipient")]
#[test_case("11111111111111111111111111111111" ; "system program")]
#[test_case("4vJ9JU1bJJE96FWSJKvHsmmFADCg4gpZQff4P3bkLKi" ; "all ones")]
fn valid_keys_render_as_hex_of_decoded_bytes(address: &str) {
    let rendered = convert(address).unwrap().to_string();

    assert_eq!(rendered.len(), 66);
    assert_eq!(rendered, format!("0x{}", hex::encode(base58_decode(address).unwrap())));
    assert!(rendered[2..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
}

#[test_case("4Cen3aDtnqDf8ZjqUXuZgXydLB5t", 20 ; "ethereum address")]
#[test_case("111111111111111111111111111111111", 33 ; "one byte too long")]
#[test_case("1111111111111111111111111111111", 31 ; "one byte too short")]
fn wrong_lengths_carry_decoded_length(address: &str, expected: usize) {
    let err = convert(address).unwrap_err();
    assert_matches!(err, ConvertError::WrongLength { len } if len == expected);
    assert!(wrong_length_message(expected).contains(&format!("is {} bytes long", expected)));
}

#[test_case("0OIl" ; "ambiguous characters")]
#[test_case("EhDUmmxeFwNYtKPw5swPqshVLRoJmzvbkxcnSLGcybB0" ; "trailing zero digit")]
#[test_case("not base58!" ; "punctuation and space")]
fn malformed_input_is_an_encoding_error(address: &str) {
    assert_matches!(convert(address), Err(ConvertError::InvalidEncoding(_)));
}

#[test]
fn conversion_is_idempotent() {
    let first = convert(DEFAULT_SOLANA_ADDRESS).unwrap();
    let second = convert(DEFAULT_SOLANA_ADDRESS).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn output_round_trips_to_the_input() {
    let rendered = convert(DEFAULT_SOLANA_ADDRESS).unwrap().to_string();
    let parsed: Bytes32Address = rendered.parse().unwrap();
    assert_eq!(parsed.to_base58(), DEFAULT_SOLANA_ADDRESS);
    assert_eq!(
        bs58::encode(parsed.as_bytes()).into_string(),
        DEFAULT_SOLANA_ADDRESS
    );

    let raw = hex::decode(rendered.trim_start_matches("0x")).unwrap();
    assert_eq!(bs58::encode(raw).into_string(), DEFAULT_SOLANA_ADDRESS);
}
