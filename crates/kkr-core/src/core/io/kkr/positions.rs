use super::lines::{is_comment_or_blank, is_end_marker, is_position_marker};
use crate::core::models::position::AtomicPosition;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct PositionTable {
    pub header: Vec<String>,
    pub positions: Vec<AtomicPosition>,
    pub end: Option<usize>, // Offset of the end-marker line within the scanned slice
}

/// Reads `x y z label` records from a slice that begins at the position
/// marker line.
///
/// Marker, comment and blank lines go to the header. The first other line
/// containing `end` stops the scan. Lines with fewer than four tokens are
/// dropped.
pub(super) fn parse_position_table(lines: &[&str]) -> PositionTable {
    let mut table = PositionTable::default();
    for (offset, line) in lines.iter().enumerate() {
        if is_position_marker(line) || is_comment_or_blank(line) {
            table.header.push(line.to_string());
            continue;
        }
        if is_end_marker(line) {
            table.end = Some(offset);
            return table;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let [x, y, z, label, ..] = tokens.as_slice() {
            table.positions.push(AtomicPosition::new(*x, *y, *z, *label));
        } else {
            trace!("Dropping short position line: {:?}", line.trim());
        }
    }
    table
}
