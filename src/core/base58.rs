// src/core/base58.rs
//! Base58 with the Bitcoin alphabet
//!
//! Base conversion by repeated long division over a little-endian digit
//! array, so no bignum support is needed. Each leading zero byte maps to
//! one leading `'1'` and back.

use crate::consts::BASE58_ALPHABET;
use crate::error::CoreError;

const INVALID: u8 = 0xff;

const DECODE_MAP: [u8; 128] = decode_map();

const fn decode_map() -> [u8; 128] {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        map[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
}

#[inline]
fn digit_value(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code >= 128 {
        return None;
    }
    match DECODE_MAP[code as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Encode bytes as Base58. Empty input gives an empty string.
pub fn encode(input: &[u8]) -> String {
    // ~log(256)/log(58) digits per byte
    let mut digits: Vec<u8> = Vec::with_capacity(input.len() * 138 / 100 + 1);

    for &byte in input {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let zeros = input.iter().take_while(|&&b| b == 0).count();

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(BASE58_ALPHABET[0] as char).take(zeros));
    out.extend(
        digits
            .iter()
            .rev()
            .map(|&d| BASE58_ALPHABET[d as usize] as char),
    );
    out
}

/// Decode a Base58 string back into bytes
///
/// `index` in [`CoreError::InvalidBase58`] is the character position.
pub fn decode(input: &str) -> Result<Vec<u8>, CoreError> {
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len());

    for (index, ch) in input.chars().enumerate() {
        let value = digit_value(ch).ok_or(CoreError::InvalidBase58 { ch, index })?;
        let mut carry = u32::from(value);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let zeros = input
        .chars()
        .take_while(|&c| c == BASE58_ALPHABET[0] as char)
        .count();
    bytes.extend(std::iter::repeat(0u8).take(zeros));
    bytes.reverse();
    Ok(bytes)
}

/// True when every character is in the Base58 alphabet
pub fn is_base58(input: &str) -> bool {
    input.chars().all(|c| digit_value(c).is_some())
}
