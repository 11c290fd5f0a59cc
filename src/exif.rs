//! Locates, extracts, and re-inserts the APP1 Exif segment of a
//! baseline JPEG marker stream.
//!
//! The segment is treated as one opaque unit (marker + length +
//! signature + payload) and never parsed further. Malformed or
//! non-JPEG input degrades to "not found" / identity instead of an
//! error; callers cannot distinguish absent from malformed.

pub const MARKER_PREFIX: u8 = 0xFF;
pub const MARKER_SOI: u8 = 0xD8;
pub const MARKER_EOI: u8 = 0xD9;
pub const MARKER_SOS: u8 = 0xDA;
pub const MARKER_APP1: u8 = 0xE1;
pub const EXIF_SIGNATURE: [u8; 6] = [0x45, 0x78, 0x69, 0x66, 0x00, 0x00];

/// One complete Exif segment, byte-for-byte as found in the stream.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ExifSegment {
    bytes: Vec<u8>,
}

impl ExifSegment {
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for ExifSegment {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl AsRef<[u8]> for ExifSegment {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for ExifSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ExifSegment({} bytes)", self.bytes.len())
    }
}

#[inline]
fn read_u16_be(bytes: &[u8], offset: usize) -> Option<u16> {
    let hi = *bytes.get(offset)?;
    let lo = *bytes.get(offset + 1)?;
    Some(u16::from(hi) << 8 | u16::from(lo))
}

/// Marker-stream scan over (marker, length) pairs.
///
/// Two exit conditions (terminal marker, buffer overrun) and one match
/// condition (APP1 with the Exif signature).
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum ScanState {
    Scanning { offset: usize },
    Found { start: usize, end: usize },
    NotFound,
}

impl ScanState {
    /// Consumes the next (marker, length) pair.
    fn step(self, bytes: &[u8]) -> Self {
        let ScanState::Scanning { offset } = self else {
            return self;
        };
        if offset + 4 > bytes.len() {
            return ScanState::NotFound;
        }
        if bytes[offset] != MARKER_PREFIX {
            return ScanState::NotFound;
        }
        let marker = bytes[offset + 1];
        // no metadata segment follows scan data
        if marker == MARKER_EOI || marker == MARKER_SOS {
            return ScanState::NotFound;
        }
        // the declared length counts itself: payload = length - 2
        let Some(length) = read_u16_be(bytes, offset + 2) else {
            return ScanState::NotFound;
        };
        let end = offset + 2 + usize::from(length);
        if end > bytes.len() {
            // truncated stream: degrade to "not found"
            return ScanState::NotFound;
        }
        if marker == MARKER_APP1 && bytes[offset + 4..].starts_with(&EXIF_SIGNATURE) {
            ScanState::Found { start: offset, end }
        } else {
            ScanState::Scanning { offset: end }
        }
    }
}

/// Walks the marker stream and returns the first Exif segment, or
/// `None` if the stream is not a JPEG, carries no Exif segment, or is
/// truncated before one is found.
#[must_use]
pub fn extract_segment(bytes: &[u8]) -> Option<ExifSegment> {
    if bytes.len() < 4 || bytes[0] != MARKER_PREFIX || bytes[1] != MARKER_SOI {
        return None;
    }
    let mut state = ScanState::Scanning { offset: 2 };
    loop {
        state = state.step(bytes);
        match state {
            ScanState::Scanning { .. } => {}
            ScanState::Found { start, end } => {
                return Some(ExifSegment {
                    bytes: bytes[start..end].to_vec(),
                })
            }
            ScanState::NotFound => return None,
        }
    }
}

/// Splices `segment` into `buffer` immediately after the SOI marker.
///
/// Identity when the segment is absent or empty, and when the buffer is
/// not a JPEG stream. Intended for freshly re-encoded streams, which
/// carry no metadata of their own; a pre-existing segment in `buffer`
/// is neither searched for nor removed.
#[must_use]
pub fn insert_segment(buffer: Vec<u8>, segment: Option<&ExifSegment>) -> Vec<u8> {
    let Some(segment) = segment else {
        return buffer;
    };
    if segment.is_empty() {
        return buffer;
    }
    if buffer.len() < 2 || buffer[0] != MARKER_PREFIX || buffer[1] != MARKER_SOI {
        return buffer;
    }
    let mut result = Vec::with_capacity(buffer.len() + segment.len());
    result.extend_from_slice(&buffer[..2]);
    result.extend_from_slice(segment.as_bytes());
    result.extend_from_slice(&buffer[2..]);
    result
}
