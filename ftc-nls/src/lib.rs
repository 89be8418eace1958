//! ftc-nls
//!
//! Text decoding for the message archives of Harvest Moon DS.
//!
//! Raw message bytes go through three passes:
//! - [`escape::rewrite_sequences`] turns the game's special byte pairs into bracketed tokens,
//! - [`charset::decode`] picks Shift-JIS or plain ASCII and prefixes the result with `jp:` / `en:`,
//! - [`humanize::to_human_readable`] spells out the remaining control characters.
//!
//! [`MessageDecoder`] runs the whole pipeline. [`Decoder`] is a plain single-charset decoder
//! for strings that are not messages (names, labels, ...).

use encoding_rs::SHIFT_JIS;
use std::borrow::Cow;

pub mod charset;
pub mod escape;
pub mod humanize;
mod message;

pub use charset::{Charset, Prefixed};
pub use message::{DecodedMessage, MessageDecoder};

pub trait TextDecoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str>;

    /// Decode C-style string: stop at the first NUL (0x00).
    fn decode_cstr<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        self.decode(&bytes[..end])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// 7-bit text. Anything with the high bit set is dumped as `hex:` instead.
    #[default]
    Ascii,
    /// Code page 932. encoding_rs' Shift_JIS is the Windows-31J flavour.
    ShiftJis,
    Utf8,
}

/// A simple decoder bound to one encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    enc: Encoding,
}

impl Decoder {
    #[inline]
    pub fn new(enc: Encoding) -> Self {
        Self { enc }
    }

    #[inline]
    pub fn encoding(&self) -> Encoding {
        self.enc
    }
}

impl TextDecoder for Decoder {
    fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self.enc {
            Encoding::Ascii => {
                if bytes.iter().any(|b| b & 0x80 != 0) {
                    Cow::Owned(format!("hex:{}", hex::encode_upper(bytes)))
                } else {
                    // 7-bit input is always valid UTF-8
                    String::from_utf8_lossy(bytes)
                }
            }
            Encoding::Utf8 => String::from_utf8_lossy(bytes),
            Encoding::ShiftJis => {
                let (cow, _had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
                cow
            }
        }
    }
}
