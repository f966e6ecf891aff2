//! Byte offsets and the cross-reference table
//!
//! Offsets are derived from the emitted bytes alone: a [`ByteCursor`] is
//! folded over the header and the object bodies, recording its value right
//! before each object is appended. Lengths are byte lengths, never character
//! counts.

use super::document::PdfIndirectObject;
use crate::error::{ExportError, Result};

/// Largest offset that fits the 10-digit xref field
pub const MAX_XREF_OFFSET: u64 = 9_999_999_999;

/// Serialized length of every xref entry
pub const XREF_ENTRY_LEN: usize = 20;

/// Generation number of the free-list head
pub const FREE_HEAD_GENERATION: u16 = 65535;

/// Running total of bytes emitted so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteCursor(u64);

impl ByteCursor {
    /// Cursor at the start of the file
    pub fn start() -> Self {
        Self(0)
    }

    /// Cursor after `bytes` more bytes
    pub fn advance(self, bytes: &[u8]) -> Self {
        Self(self.0 + bytes.len() as u64)
    }

    /// Current byte position
    pub fn position(self) -> u64 {
        self.0
    }
}

/// Offsets of the objects and of the `xref` keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable {
    /// `(object number, byte offset)` in emission order
    pub offsets: Vec<(u32, u64)>,
    /// Position where `xref` starts
    pub xref_start: u64,
}

impl OffsetTable {
    /// Offset of an object; object 0 is the free-list head at offset 0
    pub fn offset_of(&self, number: u32) -> Option<u64> {
        if number == 0 {
            return Some(0);
        }
        self.offsets
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, offset)| *offset)
    }
}

/// Fold the header and object bodies into their offsets
pub fn track_offsets(header: &[u8], objects: &[PdfIndirectObject]) -> OffsetTable {
    let start = ByteCursor::start().advance(header);
    let (offsets, end) = objects.iter().fold(
        (Vec::with_capacity(objects.len()), start),
        |(mut offsets, cursor), obj| {
            offsets.push((obj.number, cursor.position()));
            (offsets, cursor.advance(&obj.body))
        },
    );

    OffsetTable {
        offsets,
        xref_start: end.position(),
    }
}

/// In-use or free marker of an xref entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefFlag {
    /// `f`
    Free,
    /// `n`
    InUse,
}

impl XrefFlag {
    fn as_char(self) -> char {
        match self {
            XrefFlag::Free => 'f',
            XrefFlag::InUse => 'n',
        }
    }
}

/// A single cross-reference entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrefEntry {
    pub byte_offset: u64,
    pub generation: u16,
    pub flag: XrefFlag,
}

impl XrefEntry {
    /// The free-list head at object 0
    pub fn free_head() -> Self {
        Self {
            byte_offset: 0,
            generation: FREE_HEAD_GENERATION,
            flag: XrefFlag::Free,
        }
    }

    /// An in-use entry at generation 0
    pub fn in_use(byte_offset: u64) -> Self {
        Self {
            byte_offset,
            generation: 0,
            flag: XrefFlag::InUse,
        }
    }

    /// Serialize as `OOOOOOOOOO GGGGG F \n`
    ///
    /// Fails if the offset needs more than 10 digits.
    pub fn to_bytes(&self) -> Result<[u8; XREF_ENTRY_LEN]> {
        if self.byte_offset > MAX_XREF_OFFSET {
            return Err(ExportError::OffsetOverflow {
                offset: self.byte_offset,
            });
        }

        let line = format!(
            "{:010} {:05} {} \n",
            self.byte_offset,
            self.generation,
            self.flag.as_char()
        );
        let mut out = [0u8; XREF_ENTRY_LEN];
        out.copy_from_slice(line.as_bytes());
        Ok(out)
    }
}

/// Build the xref section: keyword, subsection header and all entries
pub fn write_xref_table(table: &OffsetTable) -> Result<Vec<u8>> {
    let count = table.offsets.len() + 1;
    let mut out = format!("xref\n0 {}\n", count).into_bytes();
    out.extend_from_slice(&XrefEntry::free_head().to_bytes()?);

    let mut sorted = table.offsets.clone();
    sorted.sort_by_key(|(number, _)| *number);
    for (_, offset) in sorted {
        out.extend_from_slice(&XrefEntry::in_use(offset).to_bytes()?);
    }

    Ok(out)
}
