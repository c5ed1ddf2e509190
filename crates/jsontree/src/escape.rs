//! Decoding helpers for `\uXXXX` escape sequences.
//!
//! A `\u` escape carries one UTF-16 code unit as four ASCII hexadecimal
//! digits. Units in the surrogate ranges do not stand alone: a high
//! surrogate (`0xD800..=0xDBFF`) must be combined with the low surrogate
//! (`0xDC00..=0xDFFF`) that follows it to form one scalar value above
//! U+FFFF.

/// Decodes a single ASCII hex digit (`0-9`, `A-F`, `a-f`).
pub(crate) fn hex_digit(byte: u8) -> Option<u16> {
    match byte {
        b'0'..=b'9' => Some(u16::from(byte - b'0')),
        b'a'..=b'f' => Some(u16::from(byte - b'a') + 10),
        b'A'..=b'F' => Some(u16::from(byte - b'A') + 10),
        _ => None,
    }
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Combines a surrogate pair into the scalar value it encodes.
///
/// Returns `None` unless `high` and `low` are in their respective
/// surrogate ranges.
pub(crate) fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    if !is_high_surrogate(high) || !is_low_surrogate(low) {
        return None;
    }
    let scalar =
        ((u32::from(high) - 0xD800) << 10 | (u32::from(low) - 0xDC00)) + 0x1_0000;
    char::from_u32(scalar)
}
