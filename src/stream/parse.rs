//! Integer line parsing shared by both readers

/// Parse one raw line.
///
/// Returns `Ok(None)` for blank lines and `Err` with the trimmed text when the
/// line is not an integer. Invalid UTF-8 is reported lossily.
pub(crate) fn parse_line(raw: &[u8]) -> Result<Option<i64>, String> {
    let text = String::from_utf8_lossy(raw);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|_| trimmed.to_string())
}
