//! Hex code point helpers shared by the pipeline stages.

/// Parse a bare hexadecimal code point such as `E72B` or `e72b`.
///
/// Returns `None` for empty input, non-hex characters, or values that do not fit in `u32`.
pub fn parse_hex(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(raw, 16).ok()
}

/// Uppercase hex without zero padding, e.g. `E72B`.
pub fn format_hex(code_point: u32) -> String {
    format!("{code_point:X}")
}

/// Glyph token used by downstream consumers: `u` + lowercase hex.
pub fn glyph_token(code_point: u32) -> String {
    format!("u{code_point:x}")
}

/// Source-text escape for the code point: a backslash, `u`, then lowercase hex.
pub fn escaped_literal(code_point: u32) -> String {
    format!("\\u{code_point:x}")
}
