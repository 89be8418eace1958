use encoding_rs::{Encoding as RsEncoding, SHIFT_JIS};
use std::borrow::Cow;

use crate::{charset, escape, humanize, Charset, TextDecoder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub charset: Charset,
    /// Prefixed text with control characters left as-is.
    pub original_text: String,
    /// `original_text` with control characters spelled out.
    pub text: String,
}

/// Runs the full message pipeline.
///
/// The Japanese codepage is resolved once at construction; decoding itself keeps no state,
/// so the same input always yields the same output.
#[derive(Debug, Clone, Copy)]
pub struct MessageDecoder {
    japanese: &'static RsEncoding,
}

impl MessageDecoder {
    pub fn new() -> Self {
        Self { japanese: SHIFT_JIS }
    }

    pub fn decode_message(&self, raw: &[u8]) -> DecodedMessage {
        let rewritten = escape::rewrite_sequences(raw);
        let prefixed = charset::decode_with(self.japanese, &rewritten);
        let original_text = prefixed.to_string();
        let text = humanize::to_human_readable(&original_text);

        DecodedMessage {
            charset: prefixed.charset,
            original_text,
            text,
        }
    }
}

impl Default for MessageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields the prefixed text, before humanization.
impl TextDecoder for MessageDecoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        Cow::Owned(self.decode_message(bytes).original_text)
    }
}
