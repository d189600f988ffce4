use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::AnalyzeError;

/// Decode raw bytes to text: UTF-8 when valid, otherwise Windows-1252,
/// which maps every byte and so never fails. Covers the latin1/cp1252
/// inputs seen in practice without ever panicking on odd bytes.
#[must_use]
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::warn!("input is not valid UTF-8; decoding as windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Read a file into text. This is the pipeline's only I/O suspension point.
pub fn read_to_text(path: &Path) -> Result<String, AnalyzeError> {
    let bytes = fs::read(path)?;
    Ok(decode_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::decode_bytes;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_bytes("café,menü".as_bytes()), "café,menü");
    }

    #[test]
    fn latin1_bytes_fall_back_to_windows_1252() {
        // "café" in latin1: 0xE9 for é.
        let bytes = [b'c', b'a', b'f', 0xE9];
        assert_eq!(decode_bytes(&bytes), "café");
    }

    #[test]
    fn empty_input_decodes_to_empty_text() {
        assert_eq!(decode_bytes(&[]), "");
    }
}
