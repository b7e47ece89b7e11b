use crate::budget::ByteBudget;
use crate::byte_source::ByteSource;
use crate::error::LibResult;
use log::trace;
use snafu::ResultExt;
use std::io::Read;

/// 0x7f, 127: The largest 7 bit number.
const MAX_7BIT: u8 = 0b0111_1111;

/// 0x80, 128: When this bit is set, more bytes of the quantity follow.
pub(crate) const CONTINUE: u8 = 0b1000_0000;

/// A variable-length quantity occupies at most four encoded bytes.
pub(crate) const MAX_ENCODED_LEN: usize = 4;

/// A decoded variable-length quantity, together with the bytes it was
/// encoded as in the file.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub(crate) struct Vlq {
    value: u32,
    bytes: Vec<u8>,
}

impl Vlq {
    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Read a variable-length quantity. Each byte contributes its low seven
/// bits, most significant first, and is charged against `budget` before it
/// is read. Reading stops after [`MAX_ENCODED_LEN`] bytes even when the last
/// one still has the continue bit set: the value is then whatever the first
/// four bytes encode, and the stream is left at the next position as if the
/// quantity had terminated normally.
pub(crate) fn read<R: Read>(
    source: &mut ByteSource<R>,
    budget: &mut ByteBudget,
) -> LibResult<Vlq> {
    let mut value: u32 = 0;
    let mut bytes = Vec::with_capacity(MAX_ENCODED_LEN);
    loop {
        budget.consume(1).context(budget!())?;
        let byte = source.read_or_die().context(io!())?;
        bytes.push(byte);
        value = (value << 7) | u32::from(byte & MAX_7BIT);
        if byte & CONTINUE == 0 || bytes.len() == MAX_ENCODED_LEN {
            break;
        }
    }
    trace!("decoded vlq value {} from {} bytes", value, bytes.len());
    Ok(Vlq { value, bytes })
}
