//! This crate implements the core of farm-to-console
//!
//! It reads Harvest Moon DS assets: a bounds-checked byte reader with rebasable views,
//! and the message table parser built on it. Text decoding lives in `ftc-nls`.

#![allow(clippy::uninlined_format_args)]

pub mod cursor;
pub mod error;
pub mod reader;
pub mod table;

pub use cursor::Cursor;
pub use error::{AssetError, Result};
pub use reader::{AssetBuffer, AssetReader, Endianness, Scalar};
pub use table::{TextEntry, TextGroup, TextTable, TextTableReader};
