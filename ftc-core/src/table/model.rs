use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// All message groups of a file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub groups: Vec<TextGroup>,
}

impl TextTable {
    pub fn new(groups: Vec<TextGroup>) -> Self {
        Self { groups }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &TextEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextGroup {
    pub entries: Vec<TextEntry>,
    /// The last stored offset of the group. It is read but no entry uses it;
    /// whether it is a sentinel of the format is unknown.
    pub trailing_offset: Option<u16>,
}

impl TextGroup {
    pub fn new(entries: Vec<TextEntry>) -> Self {
        Self {
            entries,
            trailing_offset: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextEntry {
    /// Usually ascending per entry. Meaning unknown.
    #[serde(rename = "Unknown")]
    pub tag: u16,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "MetaOriginalText")]
    pub original_text: String,
    /// Offset of the raw string inside the group's text data.
    #[serde(rename = "MetaOriginalAddress")]
    pub original_address: u16,
    #[serde(rename = "MetaOriginalHex")]
    pub original_hex: String,
}

impl Serialize for TextTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TextTable", 2)?;
        s.serialize_field("Count", &self.len())?;
        s.serialize_field("Groups", &self.groups)?;
        s.end()
    }
}

impl Serialize for TextGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("TextGroup", 2)?;
        s.serialize_field("Count", &self.len())?;
        s.serialize_field("Entries", &self.entries)?;
        s.end()
    }
}
