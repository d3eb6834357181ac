//! The segment model: one drawing command with its fixed-arity operands.

/// The closed set of path commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    MoveTo,
    LineTo,
    HLineTo,
    VLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticBezierTo,
    SmoothQuadraticBezierTo,
    ArcTo,
    ClosePath,
}

impl SegmentKind {
    /// Number of numeric operands the command consumes.
    pub fn arity(self) -> usize {
        match self {
            SegmentKind::MoveTo | SegmentKind::LineTo => 2,
            SegmentKind::HLineTo | SegmentKind::VLineTo => 1,
            SegmentKind::CurveTo => 6,
            SegmentKind::SmoothCurveTo | SegmentKind::QuadraticBezierTo => 4,
            SegmentKind::SmoothQuadraticBezierTo => 2,
            SegmentKind::ArcTo => 7,
            SegmentKind::ClosePath => 0,
        }
    }

    /// Maps a command letter to its kind; an uppercase letter means the
    /// operands are absolute coordinates.
    pub fn from_letter(letter: char) -> Option<(SegmentKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => SegmentKind::MoveTo,
            'Z' => SegmentKind::ClosePath,
            'L' => SegmentKind::LineTo,
            'H' => SegmentKind::HLineTo,
            'V' => SegmentKind::VLineTo,
            'C' => SegmentKind::CurveTo,
            'S' => SegmentKind::SmoothCurveTo,
            'Q' => SegmentKind::QuadraticBezierTo,
            'T' => SegmentKind::SmoothQuadraticBezierTo,
            'A' => SegmentKind::ArcTo,
            _ => return None,
        };
        Some((kind, letter.is_ascii_uppercase()))
    }

    /// The command letter, cased by the absolute flag.
    pub fn letter(self, absolute: bool) -> char {
        let upper = match self {
            SegmentKind::MoveTo => 'M',
            SegmentKind::ClosePath => 'Z',
            SegmentKind::LineTo => 'L',
            SegmentKind::HLineTo => 'H',
            SegmentKind::VLineTo => 'V',
            SegmentKind::CurveTo => 'C',
            SegmentKind::SmoothCurveTo => 'S',
            SegmentKind::QuadraticBezierTo => 'Q',
            SegmentKind::SmoothQuadraticBezierTo => 'T',
            SegmentKind::ArcTo => 'A',
        };
        if absolute {
            upper
        } else {
            upper.to_ascii_lowercase()
        }
    }
}

/// One path command with its operands.
///
/// Immutable once built: `operands.len()` always equals `kind.arity()`, and
/// construction is confined to the codec. Segment order within a path is
/// drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    kind: SegmentKind,
    absolute: bool,
    operands: Vec<f64>,
}

impl PathSegment {
    pub(crate) fn new(kind: SegmentKind, absolute: bool, operands: Vec<f64>) -> Self {
        debug_assert_eq!(operands.len(), kind.arity());
        Self {
            kind,
            absolute,
            operands,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Whether the operands are document-space coordinates rather than
    /// offsets from the current point.
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_table_round_trips() {
        for letter in ['M', 'Z', 'L', 'H', 'V', 'C', 'S', 'Q', 'T', 'A'] {
            let (kind, absolute) = SegmentKind::from_letter(letter).unwrap();
            assert!(absolute);
            assert_eq!(kind.letter(true), letter);
            assert_eq!(kind.letter(false), letter.to_ascii_lowercase());

            let lower = letter.to_ascii_lowercase();
            let (lower_kind, lower_abs) = SegmentKind::from_letter(lower).unwrap();
            assert_eq!(lower_kind, kind);
            assert!(!lower_abs);
        }
        assert_eq!(SegmentKind::from_letter('K'), None);
        assert_eq!(SegmentKind::from_letter('x'), None);
    }

    #[test]
    fn arity_table() {
        assert_eq!(SegmentKind::MoveTo.arity(), 2);
        assert_eq!(SegmentKind::LineTo.arity(), 2);
        assert_eq!(SegmentKind::HLineTo.arity(), 1);
        assert_eq!(SegmentKind::VLineTo.arity(), 1);
        assert_eq!(SegmentKind::CurveTo.arity(), 6);
        assert_eq!(SegmentKind::SmoothCurveTo.arity(), 4);
        assert_eq!(SegmentKind::QuadraticBezierTo.arity(), 4);
        assert_eq!(SegmentKind::SmoothQuadraticBezierTo.arity(), 2);
        assert_eq!(SegmentKind::ArcTo.arity(), 7);
        assert_eq!(SegmentKind::ClosePath.arity(), 0);
    }
}
