//! Gzip size measurement

use std::io::{self, Write};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Sink that only counts the bytes written to it
#[derive(Debug, Default)]
struct ByteCounter(u64);

impl Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0 += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Size of `data` once gzip-compressed at the best compression level.
///
/// Empty input counts as 0 bytes rather than the size of an empty gzip stream.
pub fn gzip_size(data: &[u8]) -> io::Result<u64> {
    if data.is_empty() {
        return Ok(0);
    }

    let mut encoder = GzEncoder::new(ByteCounter::default(), Compression::best());
    encoder.write_all(data)?;
    let counter = encoder.finish()?;
    Ok(counter.0)
}
