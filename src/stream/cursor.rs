//! Resumable batch reads over the prediction stream

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

use super::parse::parse_line;
use crate::error::{Error, LineLocation, Result};

/// Outcome of scanning the stream from a cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchStatus {
    /// Sentinel found and the batch is large enough to evaluate
    Ready,
    /// Sentinel found but fewer than `min_batch_size` values preceded it;
    /// the batch is dropped and the cursor still moves past the sentinel
    TooSmall,
    /// Input ended before a sentinel; the cursor stays where it was
    Pending,
}

/// Result of one `read_batch` call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchRead {
    /// Values preceding the sentinel (empty when `Pending`)
    pub batch: Vec<i64>,
    /// Cursor to persist for the next call
    pub next_offset: u64,
    /// Number of values scanned, including discarded ones
    pub scanned: usize,
    /// Whether the batch can be evaluated
    pub status: BatchStatus,
}

impl BatchRead {
    fn pending(start_offset: u64, scanned: usize) -> Self {
        Self {
            batch: Vec::new(),
            next_offset: start_offset,
            scanned,
            status: BatchStatus::Pending,
        }
    }

    /// Whether a complete batch of sufficient size was read
    pub fn is_ready(&self) -> bool {
        self.status == BatchStatus::Ready
    }
}

/// Read one sentinel-terminated batch starting at `start_offset`.
///
/// Lines are trimmed and blank lines skipped. Every other line must parse as
/// an integer; the first one that does not fails the whole call. When the
/// sentinel is found, `next_offset` points at the first byte after the
/// sentinel line (terminator included). When input runs out first, the
/// scanned values are discarded and `next_offset == start_offset`, so the
/// same prefix is scanned again on the next call.
///
/// An unterminated final line is treated as a complete line.
pub fn read_batch(
    path: &Path,
    start_offset: u64,
    sentinel: i64,
    min_batch_size: usize,
) -> Result<BatchRead> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("cannot open prediction stream {}", path.display()), e))?;

    let len = file
        .metadata()
        .map_err(|e| Error::io(format!("cannot stat {}", path.display()), e))?
        .len();
    if start_offset > len {
        tracing::warn!(
            path = %path.display(),
            cursor = start_offset,
            len,
            "cursor is past end of prediction stream; was the file truncated?"
        );
        return Ok(BatchRead::pending(start_offset, 0));
    }

    let mut reader = BufReader::new(file);
    reader
        .seek(SeekFrom::Start(start_offset))
        .map_err(|e| Error::io(format!("cannot seek {}", path.display()), e))?;

    let mut position = start_offset;
    let mut line = Vec::new();
    let mut batch = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| Error::io(format!("cannot read {}", path.display()), e))?;
        if read == 0 {
            break;
        }

        let line_start = position;
        position += read as u64;

        let value = match parse_line(&line) {
            Ok(Some(value)) => value,
            Ok(None) => continue,
            Err(content) => {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    location: LineLocation::Offset(line_start),
                    content,
                })
            }
        };

        if value != sentinel {
            batch.push(value);
            continue;
        }

        tracing::debug!(
            values = batch.len(),
            sentinel_at = line_start,
            next_offset = position,
            "sentinel found"
        );

        let scanned = batch.len();
        let status = if scanned < min_batch_size {
            BatchStatus::TooSmall
        } else {
            BatchStatus::Ready
        };
        return Ok(BatchRead {
            batch,
            next_offset: position,
            scanned,
            status,
        });
    }

    tracing::debug!(values = batch.len(), cursor = start_offset, "no sentinel yet");
    Ok(BatchRead::pending(start_offset, batch.len()))
}
