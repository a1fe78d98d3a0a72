//! Handling of class labels outside `[0, num_classes)`

use serde::{Deserialize, Serialize};

/// What to do with a prediction or label outside the configured class range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassPolicy {
    /// Skip the pair without counting it anywhere
    #[default]
    Lenient,
    /// Fail the computation on the first out-of-range value
    Strict,
}
