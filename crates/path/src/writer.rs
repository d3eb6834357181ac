//! Canonical compacted writer for path data.

use std::fmt::Write as _;

use crate::data::PathData;
use crate::segment::SegmentKind;

/// Serializes segments in drawing order to the canonical compacted form.
///
/// The command letter is shared across consecutive segments with the same
/// (kind, absolute) pair, and a MoveTo followed by a LineTo with an
/// unchanged absolute flag stays letter-free, so implicit linetos survive a
/// round trip. Every emitted letter and operand is followed by one space.
pub fn write_path_data(path: &PathData) -> String {
    let mut out = String::new();
    let mut previous: Option<(SegmentKind, bool)> = None;

    for segment in path {
        let kind = segment.kind();
        let absolute = segment.is_absolute();
        let letter_shared = match previous {
            None => false,
            Some((prev_kind, prev_absolute)) => {
                prev_absolute == absolute
                    && (prev_kind == kind
                        || (prev_kind == SegmentKind::MoveTo && kind == SegmentKind::LineTo))
            }
        };
        if !letter_shared {
            out.push(kind.letter(absolute));
            out.push(' ');
        }
        for operand in segment.operands() {
            let _ = write!(out, "{operand} ");
        }
        previous = Some((kind, absolute));
    }

    out
}
