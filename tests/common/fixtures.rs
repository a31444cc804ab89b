//! Corpora and stream fakes shared by the harnesses.

use std::io::{self, BufRead, Cursor, Read};

/// Recognition prefix used throughout the harnesses. The engine is
/// prefix-parameterized; tests use a neutral vendor.
pub const PREFIX: &str = "X-Vendor-";

/// Mixed log: two tag lines among noise, one commented-out occurrence.
pub const CORPUS_BASIC: &str = "Line1
Line2
X-Vendor-Model-Id:myModel
Line3
Line3a://X-Vendor-Some-Property:someValue
Line4
X-Vendor-Model-File-Name:/tmp/folder/myExport.model
Line5
";

/// Same canonical key twice; the later line must win.
pub const CORPUS_OVERWRITE: &str = "X-Vendor-Key:first
X-Vendor-Key:second
";

/// Value containing `:`; only the first `:` of the line splits key from value.
pub const CORPUS_COLON_VALUE: &str = "X-Vendor-Url:http://example.com:8080/path
";

/// Tag line with no `:` at all — skipped, not an error.
pub const CORPUS_NO_COLON: &str = "X-Vendor-Broken-Line
X-Vendor-Model-Id:stillFound
";

/// Wrap a corpus in a buffered reader the way a host hands over a log stream.
pub fn log_stream(corpus: &str) -> Cursor<Vec<u8>> {
    Cursor::new(corpus.as_bytes().to_vec())
}

/// A reader whose first read fails, for exercising the primary-path I/O
/// error propagation.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "log stream torn down"))
    }
}

/// `FailingReader` behind a `BufRead` impl.
pub fn failing_stream() -> impl BufRead {
    io::BufReader::new(FailingReader)
}
