//! Pre-shared key generation.

use std::fmt::Write;

use crate::config::PSK_LEN;

/// Draw a fresh key from the platform's secure random source and format it.
///
/// On wasm32 the bytes come from Web Crypto `getRandomValues`, natively from
/// the operating system.
pub fn generate_psk() -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; PSK_LEN];
    getrandom::fill(&mut bytes)?;
    Ok(format_psk(&bytes))
}

/// Render key bytes as a C-style array literal: `{ 0x0a, 0xff, ... }`
pub fn format_psk(bytes: &[u8; PSK_LEN]) -> String {
    let mut out = String::with_capacity(4 + PSK_LEN * 6);
    out.push_str("{ ");
    for (index, byte) in bytes.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        // writing into a String cannot fail
        let _ = write!(out, "0x{byte:02x}");
    }
    out.push_str(" }");
    out
}
