//! Utility functions for metawear-core.

use std::fmt::Write;

/// Format bytes as lowercase, space-separated hex pairs.
///
/// # Example
///
/// ```
/// use metawear_core::util::format_hex;
///
/// assert_eq!(format_hex(&[0x02, 0x01, 0xff]), "02 01 ff");
/// ```
pub fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{:02x}", byte);
    }
    out
}
