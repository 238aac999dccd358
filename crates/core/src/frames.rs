//! Frame extraction from injected multi-frame templates.
//!
//! A feed template encodes its frames with `--- FRAME n ---` markers, each
//! on its own line. [`extract_frame`] returns the text belonging to one
//! frame, excluding the markers themselves and every other frame's text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Matches a frame marker line, e.g. `--- FRAME 2 ---`.
static FRAME_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---\s*FRAME\s+(\d+)\s*---[^\S\n]*$").expect("valid regex"));

/// Number of frame sections present in the text.
pub fn frame_count(text: &str) -> usize {
    FRAME_MARKER_RE.find_iter(text).count()
}

/// Extract the text of frame `frame_number` (1-indexed).
///
/// The returned prompt excludes the delimiter markers and is trimmed of
/// surrounding blank lines. Frame numbers past the end are an error, as is
/// frame 0.
pub fn extract_frame(text: &str, frame_number: usize) -> Result<String, CoreError> {
    if frame_number == 0 {
        return Err(CoreError::Validation(
            "Frame numbers are 1-indexed".to_string(),
        ));
    }

    let markers: Vec<regex::Match> = FRAME_MARKER_RE.find_iter(text).collect();
    if frame_number > markers.len() {
        return Err(CoreError::FrameOutOfRange {
            requested: frame_number,
            available: markers.len(),
        });
    }

    let start = markers[frame_number - 1].end();
    let end = markers
        .get(frame_number)
        .map(|m| m.start())
        .unwrap_or(text.len());

    Ok(text[start..end].trim().to_string())
}
