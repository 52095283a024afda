//! Double-buffered byte stream with bounded pushback.
//!
//! The backing storage is one fixed buffer of two half-sized zones.
//! While the cursor walks one zone the other still holds the bytes
//! consumed before it, so the parser can push back up to a full zone
//! of input without the source having to support seeking. Reaching a
//! zone boundary refills the *other* zone, keeping memory use at
//! O(buffer) for arbitrarily large inputs.

use std::io::Read;

const HALF: usize = 1024;
const BUFFER_SIZE: usize = 2 * HALF;
const WINDOW_SIZE: usize = 79;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    One,
    Two,
}

pub(crate) struct Stream<R: Read> {
    source: R,
    buf: Box<[u8; BUFFER_SIZE]>,
    /// Read cursor, an absolute position into `buf`.
    cursor: usize,
    /// Zone the cursor is currently consuming.
    active: Zone,
    /// Zone the cursor consumed before the last refill, if any.
    last_active: Option<Zone>,
    /// Absolute position at which the input ends, once the source has
    /// reported a short fill.
    data_end: Option<usize>,
}

impl<R: Read> Stream<R> {
    /// Open a stream over a byte source, filling the first zone.
    pub(crate) fn open(source: R) -> std::io::Result<Self> {
        let mut stream = Stream {
            source,
            buf: Box::new([0u8; BUFFER_SIZE]),
            cursor: 0,
            active: Zone::One,
            last_active: None,
            data_end: None,
        };
        let n = stream.fill(0)?;
        if n < HALF {
            stream.data_end = Some(n);
        }
        Ok(stream)
    }

    /// Read bytes into `buf[offset..offset + HALF]` until the zone is
    /// full or the source runs dry. A short count means end of input.
    fn fill(&mut self, offset: usize) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < HALF {
            match self.source.read(&mut self.buf[offset + filled..offset + HALF]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    /// The next byte, or `None` at end of input. End of input is a
    /// soft condition; only source failures are errors.
    pub(crate) fn next(&mut self) -> std::io::Result<Option<u8>> {
        if self.data_end == Some(self.cursor) {
            return Ok(None);
        }

        if self.cursor == HALF && self.active == Zone::One {
            let n = self.fill(HALF)?;
            self.active = Zone::Two;
            self.last_active = Some(Zone::One);
            if n < HALF {
                self.data_end = Some(HALF + n);
                if n == 0 {
                    return Ok(None);
                }
            }
        } else if self.cursor == BUFFER_SIZE {
            self.cursor = 0;
            if self.active == Zone::Two {
                let n = self.fill(0)?;
                self.active = Zone::One;
                self.last_active = Some(Zone::Two);
                if n < HALF {
                    self.data_end = Some(n);
                    if n == 0 {
                        return Ok(None);
                    }
                }
            }
        }

        let byte = self.buf[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Move the cursor back `count` bytes so they are read again.
    ///
    /// Pushback is bounded to one zone; asking for more is clamped.
    /// Bytes older than the previously active zone are gone.
    pub(crate) fn pushback(&mut self, count: usize) {
        let count = count.min(HALF);
        if count > self.cursor {
            if self.last_active == Some(Zone::Two) {
                self.cursor = self.cursor + BUFFER_SIZE - count;
            } else {
                self.cursor = 0;
            }
        } else {
            self.cursor -= count;
        }
    }

    /// The most recently consumed bytes (at most 79), for diagnostics.
    pub(crate) fn recent_window(&self) -> String {
        let start = self.cursor.saturating_sub(WINDOW_SIZE);
        String::from_utf8_lossy(&self.buf[start..self.cursor]).into_owned()
    }
}
