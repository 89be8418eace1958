//! Charset selection for rewritten message bytes.

use encoding_rs::{Encoding as RsEncoding, SHIFT_JIS};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// Decoded as code page 932.
    Japanese,
    /// 7-bit text, high bytes escaped as `[:xx]`.
    English,
}

impl Charset {
    pub fn prefix(self) -> &'static str {
        match self {
            Charset::Japanese => "jp:",
            Charset::English => "en:",
        }
    }

    /// Recover the charset from an already prefixed string.
    pub fn of(text: &str) -> Option<Self> {
        if text.starts_with(Charset::Japanese.prefix()) {
            Some(Charset::Japanese)
        } else if text.starts_with(Charset::English.prefix()) {
            Some(Charset::English)
        } else {
            None
        }
    }
}

/// A decoded message body tagged with the charset that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefixed {
    pub charset: Charset,
    pub body: String,
}

impl fmt::Display for Prefixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.charset.prefix(), self.body)
    }
}

/// Whether the bytes are worth a Shift-JIS attempt: a high-bit byte other than 0xFF.
pub fn looks_japanese(bytes: &[u8]) -> bool {
    bytes.iter().any(|&b| b & 0x80 != 0 && b != 0xff)
}

/// Decode rewritten message bytes with the default Japanese codepage.
pub fn decode(bytes: &[u8]) -> Prefixed {
    decode_with(SHIFT_JIS, bytes)
}

/// Decode rewritten message bytes.
///
/// Bytes that look Japanese are decoded strictly with `japanese`; any malformed
/// sequence drops the whole message to the escaped ASCII path instead.
pub fn decode_with(japanese: &'static RsEncoding, bytes: &[u8]) -> Prefixed {
    if looks_japanese(bytes) {
        match japanese.decode_without_bom_handling_and_without_replacement(bytes) {
            Some(body) => {
                return Prefixed {
                    charset: Charset::Japanese,
                    body: body.into_owned(),
                }
            }
            None => log::trace!(
                "{} decode failed, falling back to escaped ASCII: {}",
                japanese.name(),
                hex::encode_upper(bytes)
            ),
        }
    }

    Prefixed {
        charset: Charset::English,
        body: escape_ascii(bytes),
    }
}

fn escape_ascii(bytes: &[u8]) -> String {
    let mut body = String::with_capacity(bytes.len());
    for &b in bytes {
        if b > 0x7f {
            body.push_str(&format!("[:{:02x}]", b));
        } else {
            body.push(b as char);
        }
    }
    body
}
