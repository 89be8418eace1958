//! Control-sequence rewriting.
//!
//! Message strings embed a handful of two-byte sequences that either have no Shift-JIS
//! meaning or are glyphs the game draws specially. They are rewritten into ASCII tokens
//! before any charset decoding happens.

/// Two-byte sequences, matched in order. Each consumes both bytes.
pub const SEQUENCES: &[(u8, u8, &str)] = &[
    (0x81, 0xff, "[:81ff]"),
    (0x81, 0x99, "[:star]"),
    (0x81, 0x63, "[:ellipsis]"),
    (0x81, 0x40, "[:idsp]"),
    (0x81, 0xf4, "[:note]"),
    (0x81, 0x48, "[:fwqm]"),
    (0xff, 0x24, "[%player]"),
];

/// Emitted for a lone 0xFF.
pub const REPLACE_TOKEN: &str = "[%replace]";

/// Rewrite the special byte sequences of a raw message.
///
/// An unknown `0x81 xx` pair becomes `[:81xx]` but only the `0x81` is consumed, so `xx`
/// is scanned again on its own. Both bytes are printed as unpadded lowercase hex.
/// A `0x81` in the last position is copied through untouched.
pub fn rewrite_sequences(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let b = raw[i];

        if let Some(&next) = raw.get(i + 1) {
            if let Some((_, _, token)) = SEQUENCES
                .iter()
                .find(|(b0, b1, _)| *b0 == b && *b1 == next)
            {
                out.extend_from_slice(token.as_bytes());
                i += 2;
                continue;
            }

            if b == 0x81 {
                out.extend_from_slice(format!("[:{:x}{:x}]", b, next).as_bytes());
                i += 1;
                continue;
            }
        }

        if b == 0xff {
            out.extend_from_slice(REPLACE_TOKEN.as_bytes());
        } else {
            out.push(b);
        }
        i += 1;
    }

    out
}
