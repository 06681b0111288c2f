/// Turns raw OCR output into an ordered sequence of trimmed, non-empty lines.
///
/// Total by construction: an empty input yields an empty sequence, never an
/// error. Every extractor downstream works against this sequence (or the raw
/// text directly), so the original line order must be preserved.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
