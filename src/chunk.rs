use crate::byte_source::{ByteResult, ByteSource};
use std::io::Read;

/// The 8-byte preamble of every chunk: a four character type tag followed by
/// a 32-bit big-endian byte length. Exists only long enough to validate the
/// chunk and seed its byte budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ChunkHeader {
    tag: [u8; 4],
    length: u32,
}

impl ChunkHeader {
    /// Read the preamble. Fewer than 8 bytes available is an error.
    pub(crate) fn read<R: Read>(source: &mut ByteSource<R>) -> ByteResult<Self> {
        let tag = source.read4()?;
        let length = source.read_u32()?;
        Ok(Self { tag, length })
    }

    pub fn tag(&self) -> &[u8; 4] {
        &self.tag
    }

    /// The declared byte length of the chunk body.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Exact 4-byte comparison, never display-normalized. A mismatch is not
    /// fatal by itself; callers decide what an unexpected tag means.
    pub fn matches(&self, expected: &[u8; 4]) -> bool {
        &self.tag == expected
    }

    /// The tag with non-printable bytes substituted by `?`, for display
    /// only.
    pub fn display_tag(&self) -> String {
        self.tag
            .iter()
            .map(|&b| {
                if (0x20..0x7f).contains(&b) {
                    b as char
                } else {
                    '?'
                }
            })
            .collect()
    }
}
