//! Decodes a Standard MIDI File — a header chunk followed by track chunks of
//! timed events — and reports everything it finds, in file order, to a
//! [`TraceSink`]. The bundled [`TraceWriter`] turns that stream into a
//! human-readable text trace; the decoding core itself never formats text.
//!
//! Decoding is single pass and forward only. The first structural violation
//! (a truncated stream, a chunk whose declared length is exceeded, a bad
//! header) aborts the whole decode; there is no resynchronization, because
//! the file format has no reliable marker to resynchronize on.

#[macro_use]
mod error;

mod budget;
mod byte_source;
mod chunk;
mod constants;
mod event;
mod header;
mod render;
mod track;
mod vlq;

pub use crate::chunk::ChunkHeader;
pub use crate::error::{Error, Result};
pub use crate::event::{classify, Event, MetaPayload, Payload, PayloadKind};
pub use crate::header::{Division, FileHeader};
pub use crate::render::{TraceSink, TraceWriter};

use crate::byte_source::ByteSource;
use crate::constants::{HEADER_DATA_LEN, HEADER_TAG, TRACK_TAG};
use crate::error::LibResult;
use crate::track::TrackDecoder;
use log::trace;
use snafu::ResultExt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// https://www.music.mcgill.ca/~gary/306/week9/smf.html

fn dump_inner<R: Read, S: TraceSink>(source: &mut ByteSource<R>, sink: &mut S) -> LibResult<()> {
    trace!("parsing header chunk");
    let chunk = ChunkHeader::read(source).context(io!())?;
    sink.header_chunk(&chunk).context(wr!())?;
    if !chunk.matches(HEADER_TAG) {
        return error::InvalidHeaderSnafu {
            site: site!(),
            description: format!("expected an MThd chunk, found '{}'", chunk.display_tag()),
        }
        .fail();
    }
    if chunk.length() < HEADER_DATA_LEN {
        return error::InvalidHeaderSnafu {
            site: site!(),
            description: format!(
                "declared length {} cannot hold the header fields",
                chunk.length()
            ),
        }
        .fail();
    }
    let format = source.read_u16().context(io!())?;
    let ntracks = source.read_u16().context(io!())?;
    let division = Division::from_u16(source.read_u16().context(io!())?);
    let header = FileHeader::new(format, ntracks, division);
    sink.file_header(&header).context(wr!())?;
    if chunk.length() > HEADER_DATA_LEN {
        // vendor extension bytes beyond the six standard fields
        let extra = chunk.length() - HEADER_DATA_LEN;
        sink.skip_remainder(extra).context(wr!())?;
        source.skip(u64::from(extra)).context(io!())?;
    }
    let mut satisfied: u16 = 0;
    while satisfied < header.ntracks() {
        trace!(
            "parsing track chunk {} (zero-based) of {}",
            satisfied,
            header.ntracks()
        );
        let chunk = ChunkHeader::read(source).context(io!())?;
        if chunk.matches(TRACK_TAG) {
            sink.track_chunk(&chunk, Some(satisfied)).context(wr!())?;
            TrackDecoder::new(chunk.length()).run(source, sink)?;
            satisfied += 1;
        } else {
            // tolerated: a foreign chunk where a track was expected is
            // skipped whole and does not count toward the track total
            sink.track_chunk(&chunk, None).context(wr!())?;
            if chunk.length() > 0 {
                sink.skip_chunk(chunk.length()).context(wr!())?;
                source.skip(u64::from(chunk.length())).context(io!())?;
            }
        }
    }
    if source.read().context(io!())?.is_some() {
        sink.trailing_data().context(wr!())?;
    }
    Ok(())
}

/// Decode a Standard MIDI File from `reader`, reporting every decoded unit
/// to `sink` as it is produced. The reader is consumed exactly once, left to
/// right, and is released on every exit path.
pub fn dump<R: Read, S: TraceSink>(reader: R, sink: &mut S) -> Result<()> {
    let mut source = ByteSource::new(reader);
    Ok(dump_inner(&mut source, sink)?)
}

/// Open the file at `path` and decode it. See [`dump`].
pub fn dump_path<P: AsRef<Path>, S: TraceSink>(path: P, sink: &mut S) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path).context(error::OpenSnafu { path })?;
    dump(BufReader::new(file), sink)
}
