//! Log entry storage

use super::config::MAX_LOG_MESSAGE_LENGTH;
use super::level::LogLevel;
use core::cmp::min;
use core::fmt::{self, Write};

/// A single formatted log record
///
/// The message is stored inline so that creating an entry never allocates;
/// anything beyond [`MAX_LOG_MESSAGE_LENGTH`] bytes is cut at the last
/// complete UTF-8 character.
#[derive(Debug, Clone)]
pub struct LogEntry {
    seq: usize,
    level: LogLevel,
    length: usize,
    message: [u8; MAX_LOG_MESSAGE_LENGTH],
}

impl LogEntry {
    /// Formats `args` into a new entry
    pub fn from_args(level: LogLevel, seq: usize, args: fmt::Arguments) -> Self {
        let mut entry = Self {
            seq,
            level,
            length: 0,
            message: [0; MAX_LOG_MESSAGE_LENGTH],
        };

        let mut writer = MessageWriter::new(&mut entry.message);
        let _ = fmt::write(&mut writer, args);

        entry.length = writer.len();

        entry
    }

    /// The formatted message
    pub fn message(&self) -> &str {
        // MessageWriter only ever stops on a char boundary
        core::str::from_utf8(&self.message[..self.length]).unwrap_or("")
    }

    /// Priority of this entry
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Sequence number assigned by the buffer
    pub fn seq(&self) -> usize {
        self.seq
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:8}] {} {}", self.seq, self.level.as_str(), self.message())
    }
}

/// a helper to write message from args to [u8; MAX_LOG_MESSAGE_LENGTH]
struct MessageWriter<'a> {
    buffer: &'a mut [u8],
    pos: usize,
}

impl<'a> MessageWriter<'a> {
    fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, pos: 0 }
    }

    fn len(&self) -> usize {
        self.pos
    }
}

impl Write for MessageWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.buffer.len() - self.pos;
        let mut to_copy = min(s.len(), remaining);
        while !s.is_char_boundary(to_copy) {
            to_copy -= 1;
        }

        self.buffer[self.pos..self.pos + to_copy].copy_from_slice(&s.as_bytes()[..to_copy]);
        self.pos += to_copy;
        Ok(())
    }
}
