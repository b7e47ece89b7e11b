use crate::constants::{
    META_END_OF_TRACK, META_EVENT, META_TEXT_FIRST, META_TEXT_LAST, SONG_POSITION, SONG_SELECT,
    SYSEX_F0, SYSEX_F7,
};

/// How many payload bytes follow a status byte, and how that count is found.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PayloadKind {
    /// The payload is `n` data bytes, known from the status byte alone.
    Fixed(u8),

    /// The payload length is a variable-length quantity that follows the
    /// status byte.
    VlqPrefixed,

    /// A meta event: one type byte, then a variable-length quantity, then
    /// that many payload bytes.
    Meta,
}

/// Classify a status byte by its high nibble, falling through to the
/// individual system statuses. Statuses without a rule of their own carry no
/// payload; the table is permissive, not a validation of the event set.
pub fn classify(status: u8) -> PayloadKind {
    match status >> 4 {
        // note off, note on, polyphonic pressure, control change, pitch bend
        0x8 | 0x9 | 0xa | 0xb | 0xe => PayloadKind::Fixed(2),
        // program change, channel pressure
        0xc | 0xd => PayloadKind::Fixed(1),
        _ => match status {
            SYSEX_F0 | SYSEX_F7 => PayloadKind::VlqPrefixed,
            SONG_POSITION => PayloadKind::Fixed(2),
            SONG_SELECT => PayloadKind::Fixed(1),
            META_EVENT => PayloadKind::Meta,
            _ => PayloadKind::Fixed(0),
        },
    }
}

/// One decoded track event. Immutable once decoded; the absolute time is the
/// running sum of every delta-time seen so far in the same track.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Event {
    delta_time: u32,
    absolute_time: u64,
    status: u8,
    payload: Payload,
}

impl Event {
    pub(crate) fn new(delta_time: u32, absolute_time: u64, status: u8, payload: Payload) -> Self {
        Self {
            delta_time,
            absolute_time,
            status,
            payload,
        }
    }

    /// Ticks since the previous event in the same track.
    pub fn delta_time(&self) -> u32 {
        self.delta_time
    }

    /// Ticks since the start of the track.
    pub fn absolute_time(&self) -> u64 {
        self.absolute_time
    }

    pub fn status(&self) -> u8 {
        self.status
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns true for the `FF 2F` end-of-track meta event, the only event
    /// that terminates a track.
    pub fn is_end_of_track(&self) -> bool {
        matches!(&self.payload, Payload::Meta(meta) if meta.meta_type() == META_END_OF_TRACK)
    }
}

/// <event> = <MIDI event> | <sysex event> | <meta-event>
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Payload {
    /// The data bytes of a channel voice or system common message; the
    /// length is fixed by the status byte.
    Fixed(Vec<u8>),

    /// A system exclusive payload, with its length given by a
    /// variable-length quantity after the status byte.
    Sysex(Vec<u8>),

    /// A meta event payload.
    Meta(MetaPayload),
}

/// The body of a meta event: `FF <type> <length> <bytes>`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MetaPayload {
    meta_type: u8,
    length_bytes: Vec<u8>,
    data: Vec<u8>,
}

impl MetaPayload {
    pub(crate) fn new(meta_type: u8, length_bytes: Vec<u8>, data: Vec<u8>) -> Self {
        Self {
            meta_type,
            length_bytes,
            data,
        }
    }

    pub fn meta_type(&self) -> u8 {
        self.meta_type
    }

    /// The length field exactly as encoded in the file.
    pub fn length_bytes(&self) -> &[u8] {
        &self.length_bytes
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Meta event types 01 through 07 carry text (Text, Copyright, Track
    /// Name, Instrument Name, Lyric, Marker, Cue Point).
    pub fn is_text(&self) -> bool {
        (META_TEXT_FIRST..=META_TEXT_LAST).contains(&self.meta_type)
    }
}
