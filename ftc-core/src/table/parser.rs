use std::iter;
use std::mem::size_of;
use std::path::Path;

use ftc_nls::MessageDecoder;

use super::{TextEntry, TextGroup, TextTable};
use crate::error::Result;
use crate::reader::{AssetBuffer, AssetReader};

/// Parses the message table of `MessageData.bin`.
///
/// Layout (little-endian):
/// - u32 group_count
/// - [group_count] u32 group offsets, absolute
/// - each group:
///     - u32 entry_count
///     - [entry_count] u16 stored offsets
///     - [entry_count] u16 tags
///     - string data, NUL-terminated strings addressed relative to its start
///
/// Entry 0 always reads its string at offset 0 and entry `i` at `stored[i - 1]`;
/// the last stored offset is never used to find a string.
#[derive(Debug, Clone, Copy)]
pub struct TextTableReader<'a> {
    reader: AssetReader<'a>,
    decoder: MessageDecoder,
}

impl<'a> TextTableReader<'a> {
    pub fn new(reader: AssetReader<'a>) -> Self {
        Self::with_decoder(reader, MessageDecoder::new())
    }

    pub fn with_decoder(reader: AssetReader<'a>, decoder: MessageDecoder) -> Self {
        Self { reader, decoder }
    }

    pub fn read_table(&self) -> Result<TextTable> {
        let offsets = self.group_offsets()?;
        log::debug!("{} message groups", offsets.len());

        let groups = offsets
            .into_iter()
            .map(|offset| self.read_group(offset as usize))
            .collect::<Result<Vec<_>>>()?;

        Ok(TextTable::new(groups))
    }

    fn group_offsets(&self) -> Result<Vec<u32>> {
        let mut cursor = self.reader.start_reading(0);
        let count = self.reader.next_u32(&mut cursor)? as usize;

        let mut offsets = Vec::with_capacity(count.min(self.reader.len() / size_of::<u32>()));
        for _ in 0..count {
            offsets.push(self.reader.next_u32(&mut cursor)?);
        }
        Ok(offsets)
    }

    fn read_group(&self, offset: usize) -> Result<TextGroup> {
        let group = self.reader.with_offset(offset)?;
        let mut cursor = group.start_reading(0);

        let count = group.next_u32(&mut cursor)? as usize;
        let capacity = count.min(group.len() / size_of::<u16>());

        let mut stored = Vec::with_capacity(capacity);
        for _ in 0..count {
            stored.push(group.next_u16(&mut cursor)?);
        }

        let mut tags = Vec::with_capacity(capacity);
        for _ in 0..count {
            tags.push(group.next_u16(&mut cursor)?);
        }

        // header + stored offsets + tags
        let text = group.with_offset(size_of::<u32>() + 2 * size_of::<u16>() * count)?;

        let entries = iter::once(0)
            .chain(stored.iter().copied())
            .zip(tags)
            .map(|(address, tag)| self.read_entry(&text, address, tag))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "group at {:#x}: {} entries, text data at {:#x}",
            group.base(),
            entries.len(),
            text.base()
        );

        Ok(TextGroup {
            entries,
            trailing_offset: stored.last().copied(),
        })
    }

    fn read_entry(&self, text: &AssetReader<'a>, address: u16, tag: u16) -> Result<TextEntry> {
        let raw = text.read_null_terminated_bytes(address as usize)?;
        let message = self.decoder.decode_message(raw);

        Ok(TextEntry {
            tag,
            text: message.text,
            original_text: message.original_text,
            original_address: address,
            original_hex: hex::encode_upper(raw),
        })
    }
}

/// Parse a message table that is already in memory.
pub fn read_bytes(bytes: &[u8]) -> Result<TextTable> {
    TextTableReader::new(AssetReader::new(bytes)).read_table()
}

/// Load `path` and parse its message table.
pub fn read_from(path: impl AsRef<Path>) -> Result<TextTable> {
    let buffer = AssetBuffer::from_file(path)?;
    TextTableReader::new(buffer.reader()).read_table()
}
