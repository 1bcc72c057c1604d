//! Numeric literal parsing for bit bounds and assigned values.

/// Parses a literal value: `0x`, `0o` and `0b` prefixes select the radix, anything else is
/// decimal. `_` separators are ignored. A decimal with a leading zero (`013`) is rejected
/// unless every digit is zero.
pub fn parse_value(text: &str) -> Option<u64> {
    let cleaned: String = text.replace('_', "");
    if cleaned.is_empty() {
        return None;
    }
    if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        u64::from_str_radix(bin, 2).ok()
    } else if let Some(oct) = cleaned
        .strip_prefix("0o")
        .or_else(|| cleaned.strip_prefix("0O"))
    {
        u64::from_str_radix(oct, 8).ok()
    } else if cleaned.starts_with('0') && cleaned.bytes().any(|b| b != b'0') {
        None
    } else {
        cleaned.parse::<u64>().ok()
    }
}

/// Parses a bit position. Bounds are always plain decimal; positions past `u32::MAX`
/// saturate so they still surface as out-of-word ranges.
pub fn parse_bit(text: &str) -> Option<u32> {
    if text.is_empty() || !text.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    Some(text.parse::<u32>().unwrap_or(u32::MAX))
}
