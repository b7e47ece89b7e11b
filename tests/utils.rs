#![allow(dead_code)]

use log::LevelFilter;
use mididump::{ChunkHeader, Event, FileHeader, TraceSink};
use std::io::{self, Write};
use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn enable_logging() {
    LOGGER.call_once(logger_init)
}

fn logger_init() {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Trace)
        .init();
}

/// An MThd chunk declaring exactly the six standard fields.
pub fn header_chunk(format: u16, ntracks: u16, division: u16) -> Vec<u8> {
    let mut bytes = b"MThd".to_vec();
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&ntracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    bytes
}

/// Wrap `body` in an MTrk chunk declaring exactly its length.
pub fn track_chunk(body: &[u8]) -> Vec<u8> {
    chunk(b"MTrk", body)
}

/// Wrap `body` in a chunk with an arbitrary tag.
pub fn chunk(tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut bytes = tag.to_vec();
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// A track whose only event is the end-of-track marker.
pub fn empty_track() -> Vec<u8> {
    track_chunk(&[0x00, 0xff, 0x2f, 0x00])
}

/// Records everything the decoder reports, for structural assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub header: Option<FileHeader>,
    pub chunks: Vec<(String, u32, Option<u16>)>,
    pub tracks: Vec<Vec<Event>>,
    pub remainder_skips: Vec<u32>,
    pub chunk_skips: Vec<u32>,
    pub trailing_data: bool,
}

impl TraceSink for RecordingSink {
    fn header_chunk(&mut self, chunk: &ChunkHeader) -> io::Result<()> {
        self.chunks.push((chunk.display_tag(), chunk.length(), None));
        Ok(())
    }

    fn file_header(&mut self, header: &FileHeader) -> io::Result<()> {
        self.header = Some(*header);
        Ok(())
    }

    fn track_chunk(&mut self, chunk: &ChunkHeader, index: Option<u16>) -> io::Result<()> {
        self.chunks
            .push((chunk.display_tag(), chunk.length(), index));
        if index.is_some() {
            self.tracks.push(Vec::new());
        }
        Ok(())
    }

    fn event(&mut self, event: &Event) -> io::Result<()> {
        self.tracks
            .last_mut()
            .expect("an event outside of any track")
            .push(event.clone());
        Ok(())
    }

    fn skip_remainder(&mut self, num_bytes: u32) -> io::Result<()> {
        self.remainder_skips.push(num_bytes);
        Ok(())
    }

    fn skip_chunk(&mut self, num_bytes: u32) -> io::Result<()> {
        self.chunk_skips.push(num_bytes);
        Ok(())
    }

    fn trailing_data(&mut self) -> io::Result<()> {
        self.trailing_data = true;
        Ok(())
    }
}
