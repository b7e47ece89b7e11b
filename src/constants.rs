/// `MThd`: the tag of the header chunk, which must come first in the file.
pub(crate) const HEADER_TAG: &[u8; 4] = b"MThd";

/// `MTrk`: the tag of a track chunk.
pub(crate) const TRACK_TAG: &[u8; 4] = b"MTrk";

/// The header chunk carries format, track count and division, two bytes
/// each. A header declaring fewer than these 6 bytes is invalid; anything it
/// declares beyond them is a vendor extension and is skipped.
pub(crate) const HEADER_DATA_LEN: u32 = 6;

/// `0xFF`: File Spec: All meta-events begin with FF, then have an event type
/// byte (which is always less than 128)
pub(crate) const META_EVENT: u8 = 0xff;

/// `0xF0`: File Spec: `F0 <length> <bytes to be transmitted after F0>`
pub(crate) const SYSEX_F0: u8 = 0xf0;

/// `0xF7`: File Spec: `F7 <length> <all bytes to be transmitted>`
pub(crate) const SYSEX_F7: u8 = 0xf7;

/// `0xF2`: Song Position Pointer, a system common message with two data
/// bytes.
pub(crate) const SONG_POSITION: u8 = 0xf2;

/// `0xF3`: Song Select, a system common message with one data byte.
pub(crate) const SONG_SELECT: u8 = 0xf3;

/// `0x2F`: File Spec: `FF 2F 00` End of Track. "This event is not optional."
/// It is the only event that terminates a track.
pub(crate) const META_END_OF_TRACK: u8 = 0x2f;

/// `0x01`: the first of the text-bearing meta event types (Text, Copyright,
/// Track Name, Instrument Name, Lyric, Marker, Cue Point).
pub(crate) const META_TEXT_FIRST: u8 = 0x01;

/// `0x07`: the last of the text-bearing meta event types.
pub(crate) const META_TEXT_LAST: u8 = 0x07;
