//! Report archive decoding
//!
//! The service answers GetReport with a zip archive holding a single text
//! file. [`ReportArchive`] owns the buffered response body; [`ReportLines`]
//! decompresses the first entry on demand and yields its lines once.
//!
//! Rows end at `\r\n`, `\n`, or a lone `\r`. Bytes that are not valid UTF-8
//! are replaced with U+FFFD rather than aborting the report.

use crate::error::{ArchiveError, Error, Result};
use std::io::{BufRead, BufReader, Cursor};
use tracing::debug;

const BYTE_ORDER_MARK: &[u8] = b"\xef\xbb\xbf";

/// Zip archive returned by the service, held in memory
pub struct ReportArchive {
    archive: zip::ZipArchive<Cursor<Vec<u8>>>,
    opened: bool,
}

impl ReportArchive {
    /// Parse the archive's central directory from a response body
    pub fn new(body: impl Into<Vec<u8>>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(body.into()))
            .map_err(|e| Error::Archive(ArchiveError::Malformed(e)))?;

        debug!(entries = archive.len(), "decoded report archive");

        Ok(Self {
            archive,
            opened: false,
        })
    }

    /// Number of entries in the archive
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no entries
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Open the first entry and return its lines
    ///
    /// Each report archive contains a single file, so the first entry is used
    /// without looking at its name. The sequence can be opened only once;
    /// later calls fail with [`ArchiveError::Consumed`]. An archive with no
    /// entries fails with [`ArchiveError::Empty`].
    pub fn lines(&mut self) -> Result<ReportLines<'_>> {
        if self.opened {
            return Err(ArchiveError::Consumed.into());
        }
        self.opened = true;

        if self.archive.len() == 0 {
            return Err(ArchiveError::Empty.into());
        }

        let entry = self
            .archive
            .by_index(0)
            .map_err(|e| Error::Archive(ArchiveError::Malformed(e)))?;

        debug!(
            name = entry.name(),
            compressed = entry.compressed_size(),
            size = entry.size(),
            "opened report entry"
        );

        Ok(ReportLines {
            reader: BufReader::new(entry),
            first: true,
            skip_lf: false,
        })
    }
}

impl std::fmt::Debug for ReportArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportArchive")
            .field("entries", &self.archive.len())
            .field("opened", &self.opened)
            .finish()
    }
}

/// Forward-only sequence of report rows
///
/// Rows are decompressed as they are pulled. Dropping the iterator releases
/// the decompressor.
pub struct ReportLines<'a> {
    reader: BufReader<zip::read::ZipFile<'a>>,
    first: bool,
    // previous row ended in '\r'; a '\n' right after it belongs to the same terminator
    skip_lf: bool,
}

impl ReportLines<'_> {
    /// Read raw bytes up to the next terminator; `None` at end of entry
    fn read_row(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut row = Vec::new();
        let mut started = false;

        loop {
            let available = self.reader.fill_buf()?;
            if available.is_empty() {
                return Ok(started.then_some(row));
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }
            started = true;

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    row.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    return Ok(Some(row));
                }
                None => {
                    let len = available.len();
                    row.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl Iterator for ReportLines<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = match self.read_row() {
            Ok(row) => row?,
            Err(e) => return Some(Err(ArchiveError::Read(e).into())),
        };

        let bytes = if std::mem::replace(&mut self.first, false) {
            row.strip_prefix(BYTE_ORDER_MARK).unwrap_or(row.as_slice())
        } else {
            row.as_slice()
        };

        Some(Ok(String::from_utf8_lossy(bytes).into_owned()))
    }
}
