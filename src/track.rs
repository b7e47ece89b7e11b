use crate::budget::ByteBudget;
use crate::byte_source::ByteSource;
use crate::error::LibResult;
use crate::event::{classify, Event, MetaPayload, Payload, PayloadKind};
use crate::render::TraceSink;
use crate::vlq;
use log::{debug, trace};
use snafu::ResultExt;
use std::io::Read;

/// Decodes the body of one MTrk chunk, emitting each event to the sink as it
/// is produced. Owns the chunk's byte budget and the track's running
/// absolute time; both die with the decoder at the end of the chunk.
pub(crate) struct TrackDecoder {
    budget: ByteBudget,
    absolute_time: u64,
}

impl TrackDecoder {
    pub(crate) fn new(declared_length: u32) -> Self {
        Self {
            budget: ByteBudget::new(declared_length),
            absolute_time: 0,
        }
    }

    /// Run the event loop until the end-of-track meta event, or until the
    /// budget runs out first (the track is then fully consumed even without
    /// a terminator). Whatever remains after a terminator is skipped and
    /// reported, never decoded.
    pub(crate) fn run<R: Read, S: TraceSink>(
        mut self,
        source: &mut ByteSource<R>,
        sink: &mut S,
    ) -> LibResult<()> {
        while !self.budget.is_exhausted() {
            let event = self.next_event(source)?;
            trace!("decoded {:?}", event);
            let is_end = event.is_end_of_track();
            sink.event(&event).context(wr!())?;
            if is_end {
                debug!("end of track event");
                break;
            }
        }
        let remainder = self.budget.remaining();
        if remainder > 0 {
            sink.skip_remainder(remainder).context(wr!())?;
            source.skip(u64::from(remainder)).context(io!())?;
        }
        Ok(())
    }

    fn next_event<R: Read>(&mut self, source: &mut ByteSource<R>) -> LibResult<Event> {
        let delta = vlq::read(source, &mut self.budget)?;
        self.absolute_time += u64::from(delta.value());
        self.budget.consume(1).context(budget!())?;
        let status = source.read_or_die().context(io!())?;
        let payload = match classify(status) {
            PayloadKind::Fixed(len) => Payload::Fixed(self.read_data(source, u32::from(len))?),
            PayloadKind::VlqPrefixed => {
                let length = vlq::read(source, &mut self.budget)?;
                Payload::Sysex(self.read_data(source, length.value())?)
            }
            PayloadKind::Meta => {
                self.budget.consume(1).context(budget!())?;
                let meta_type = source.read_or_die().context(io!())?;
                let length = vlq::read(source, &mut self.budget)?;
                let data = self.read_data(source, length.value())?;
                Payload::Meta(MetaPayload::new(meta_type, length.into_bytes(), data))
            }
        };
        Ok(Event::new(delta.value(), self.absolute_time, status, payload))
    }

    fn read_data<R: Read>(&mut self, source: &mut ByteSource<R>, len: u32) -> LibResult<Vec<u8>> {
        self.budget.consume(len).context(budget!())?;
        Ok(source.read_n(len as usize).context(io!())?)
    }
}
