//! Arbitrary-precision hexadecimal to decimal conversion.
//!
//! CIDs observed in the wild reach ~20 decimal digits, which overflows both
//! `i64` and the 53-bit mantissa of `f64`. The conversion therefore runs over
//! a decimal digit buffer instead of a machine integer.

/// Converts a hexadecimal string to its exact decimal representation.
///
/// Accepts upper- and lowercase hex digits. The result has no sign, no
/// separators, and no leading zeros (the value zero converts to `"0"`).
///
/// Returns `None` for an empty string or any non-hex character. Magnitude is
/// unbounded; precision is never lost.
///
/// # Examples
///
/// ```
/// use maps_cid_converter::converter::hex::hex_to_decimal;
///
/// assert_eq!(hex_to_decimal("ff"), Some("255".to_string()));
/// assert_eq!(
///     hex_to_decimal("8e6273dccb2b7b1c"),
///     Some("10259890293242034972".to_string())
/// );
/// ```
pub fn hex_to_decimal(hex: &str) -> Option<String> {
    if hex.is_empty() {
        return None;
    }

    // Base-10 digits, least significant first.
    let mut digits: Vec<u8> = vec![0];

    for c in hex.chars() {
        let nibble = c.to_digit(16)?;

        // digits = digits * 16 + nibble
        let mut carry = nibble;
        for d in digits.iter_mut() {
            let v = u32::from(*d) * 16 + carry;
            *d = (v % 10) as u8;
            carry = v / 10;
        }
        while carry > 0 {
            digits.push((carry % 10) as u8);
            carry /= 10;
        }
    }

    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }

    Some(digits.iter().rev().map(|d| char::from(b'0' + d)).collect())
}
