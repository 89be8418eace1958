//! The message table of `MessageData.bin`.

mod model;
mod parser;

pub use model::{TextEntry, TextGroup, TextTable};
pub use parser::{read_bytes, read_from, TextTableReader};
