//! Ground-truth label loading

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::parse::parse_line;
use crate::error::{Error, LineLocation, Result};

/// Load every label from `path`.
///
/// Blank lines are skipped. The first non-integer line aborts the load; no
/// partial set is returned.
pub fn load_all(path: &Path) -> Result<Vec<i64>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("cannot open ground truth file {}", path.display()), e))?;
    let mut reader = BufReader::new(file);

    let mut labels = Vec::new();
    let mut line = Vec::new();
    let mut line_no = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| Error::io(format!("cannot read {}", path.display()), e))?;
        if read == 0 {
            break;
        }
        line_no += 1;

        match parse_line(&line) {
            Ok(Some(value)) => labels.push(value),
            Ok(None) => {}
            Err(content) => {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    location: LineLocation::Line(line_no),
                    content,
                })
            }
        }
    }

    tracing::debug!(path = %path.display(), labels = labels.len(), "ground truth loaded");
    Ok(labels)
}

/// Which part of the ground-truth set is paired with a batch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelWindow {
    /// The whole file; it must hold exactly one label per batch prediction
    #[default]
    Whole,
    /// The last `batch_len` labels, for label files that grow with the stream
    Trailing,
}

impl LabelWindow {
    /// Select the labels to compare against a batch of `batch_len` predictions
    pub fn select<'a>(&self, labels: &'a [i64], batch_len: usize) -> Result<&'a [i64]> {
        match self {
            Self::Whole => Ok(labels),
            Self::Trailing => {
                if labels.len() < batch_len {
                    return Err(Error::LengthMismatch {
                        predictions: batch_len,
                        truth: labels.len(),
                    });
                }
                Ok(&labels[labels.len() - batch_len..])
            }
        }
    }
}
