//! Tokenizer and segment builder for the path-data mini-language.
//!
//! The tokenizer splits on whitespace and commas, so exactly one separator
//! between elements is the supported packing. Compact forms that rely on a
//! sign character or decimal point as a token boundary (`"M10-20"`) are out
//! of grammar and rejected.

use crate::data::PathData;
use crate::error::MalformedPath;
use crate::segment::{PathSegment, SegmentKind};

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | ',')
}

/// Parses path-data text into an ordered segment sequence.
pub fn parse_path_data(text: &str) -> Result<PathData, MalformedPath> {
    let tokens: Vec<&str> = text.split(is_separator).filter(|t| !t.is_empty()).collect();

    let mut segments = Vec::new();
    let mut current: Option<(SegmentKind, bool)> = None;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        // Set when the command letter and its first operand share a token
        // ("M10 20"): the remainder after the letter is the operand head.
        let mut fused_operand: Option<&str> = None;

        let first = token
            .chars()
            .next()
            .expect("BUG: empty tokens are filtered out");
        if first.is_ascii_alphabetic() {
            let (kind, absolute) = SegmentKind::from_letter(first).ok_or_else(|| {
                MalformedPath::new(text, format!("unrecognized command letter '{first}'"))
            })?;
            current = Some((kind, absolute));
            let rest = &token[1..];
            if rest.is_empty() {
                i += 1;
            } else {
                fused_operand = Some(rest);
            }
        } else {
            match current {
                // Coordinate pairs continuing a moveto are implicit linetos.
                Some((SegmentKind::MoveTo, absolute)) => {
                    current = Some((SegmentKind::LineTo, absolute));
                }
                // Nothing can consume an operand after a close command.
                Some((SegmentKind::ClosePath, _)) => {
                    return Err(MalformedPath::new(
                        text,
                        format!("operand '{token}' after a close command"),
                    ));
                }
                Some(_) => {}
                None => {
                    return Err(MalformedPath::new(
                        text,
                        format!("operand '{token}' before any command"),
                    ));
                }
            }
        }

        let (kind, absolute) = current.expect("BUG: command was established above");
        if kind == SegmentKind::ClosePath && fused_operand.is_some() {
            return Err(MalformedPath::new(
                text,
                format!("operands attached to close command '{token}'"),
            ));
        }

        let arity = kind.arity();
        let mut operands = Vec::with_capacity(arity);
        while operands.len() < arity {
            let operand = match fused_operand.take() {
                Some(head) => {
                    i += 1;
                    head
                }
                None => {
                    let tok = tokens.get(i).copied().ok_or_else(|| {
                        MalformedPath::new(
                            text,
                            format!(
                                "'{}' expects {arity} operands, found {}",
                                kind.letter(absolute),
                                operands.len()
                            ),
                        )
                    })?;
                    i += 1;
                    tok
                }
            };
            let value: f64 = operand
                .parse()
                .map_err(|_| MalformedPath::new(text, format!("invalid number '{operand}'")))?;
            operands.push(value);
        }

        segments.push(PathSegment::new(kind, absolute, operands));
    }

    Ok(PathData::from_segments(segments))
}
