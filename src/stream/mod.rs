//! Line-oriented integer streams
//!
//! - `cursor`: resumable batch reads over the append-only prediction stream
//! - `labels`: full loads of the ground-truth label file

mod cursor;
mod labels;
mod parse;


pub use cursor::{read_batch, BatchRead, BatchStatus};
pub use labels::{load_all, LabelWindow};
