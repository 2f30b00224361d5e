//! Hex ⇄ Base-58 codec.
//!
//! Conversion treats the hex string as one big unsigned integer and changes
//! radix by long division over byte limbs. Big-integer arithmetic alone
//! erases leading zero bytes, so the codec counts literal leading `"00"`
//! pairs (encode) and leading `'1'` characters (decode) and restores them
//! explicitly; that count is a property of the original string, never of the
//! numeric value.

use rp_error::CodecError;

/// The Base-58 alphabet: digits and letters minus the ambiguous `0 O I l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Character-to-digit table for ASCII, `0xFF` marking characters outside the
/// alphabet. Built at compile time, shared immutably process-wide.
const DIGITS: [u8; 128] = build_digit_table();

const fn build_digit_table() -> [u8; 128] {
    let mut table = [0xFFu8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

fn digit_value(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DIGITS[ch as usize] {
        0xFF => None,
        digit => Some(digit),
    }
}

/// Encodes an even-length hex string as Base-58 text.
///
/// Every leading `"00"` byte pair of the input becomes one leading `'1'` in
/// the output; the remaining value is rendered by repeated division by 58.
/// An all-zero input of *n* bytes therefore encodes to *n* `'1'`s, and the
/// empty string encodes to the empty string.
///
/// # Errors
///
/// Returns [`CodecError::InvalidHex`] when the input is not valid even-length
/// hex. No partial output is produced.
pub fn encode(hex_value: &str) -> Result<String, CodecError> {
    let bytes = hex::decode(hex_value).map_err(|e| CodecError::InvalidHex(e.to_string()))?;

    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();

    // Base-256 → base-58, least-significant digit first.
    let mut digits: Vec<u8> = Vec::with_capacity(bytes.len() * 138 / 100 + 1);
    for &byte in &bytes[leading_zeros..] {
        let mut carry = byte as u32;
        for digit in digits.iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut output = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        output.push('1');
    }
    for &digit in digits.iter().rev() {
        output.push(ALPHABET[digit as usize] as char);
    }
    Ok(output)
}

/// Decodes Base-58 text to lowercase even-length hex.
///
/// Every leading `'1'` of the input becomes one leading `"00"` byte pair in
/// the output. The empty string decodes to `"00"`, as does `"1"`: both denote
/// a single zero byte.
///
/// # Errors
///
/// Returns [`CodecError::InvalidCharacter`] when any character of the input,
/// anywhere in the string, is outside the Base-58 alphabet.
pub fn decode(base58_value: &str) -> Result<String, CodecError> {
    // Base-58 → base-256, least-significant byte first.
    let mut bytes: Vec<u8> = Vec::with_capacity(base58_value.len() * 733 / 1000 + 1);
    for (index, ch) in base58_value.chars().enumerate() {
        let digit = digit_value(ch).ok_or(CodecError::InvalidCharacter { ch, index })?;
        let mut carry = digit as u32;
        for byte in bytes.iter_mut() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }
    bytes.reverse();

    let leading_ones = base58_value.chars().take_while(|&c| c == '1').count();
    let mut restored = vec![0u8; leading_ones];
    restored.extend_from_slice(&bytes);

    // Empty input carries a zero value and no restored pairs; it still
    // denotes one zero byte.
    if restored.is_empty() {
        restored.push(0);
    }

    Ok(hex::encode(restored))
}

/// Encodes hex and prepends a literal prefix to the result.
///
/// # Errors
///
/// Same failure modes as [`encode`].
pub fn encode_with_prefix(hex_value: &str, prefix: &str) -> Result<String, CodecError> {
    let encoded = encode(hex_value)?;
    Ok(format!("{prefix}{encoded}"))
}

/// Removes every occurrence of `prefix` from the input, then decodes.
///
/// Removal is substring-wide rather than anchored to the front of the string;
/// existing configurations depend on this.
///
/// # Errors
///
/// Same failure modes as [`decode`], applied to the stripped string.
pub fn decode_with_prefix(base58_value: &str, prefix: &str) -> Result<String, CodecError> {
    if prefix.is_empty() {
        return decode(base58_value);
    }
    decode(&base58_value.replace(prefix, ""))
}
