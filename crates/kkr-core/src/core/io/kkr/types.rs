use super::lines::{
    TYPE_COUNT_KEYWORD, TYPE_HEADER_KEYWORDS, TYPE_TABLE_TERMINATORS, is_comment_or_blank,
    mentions, mentions_all, mentions_any,
};
use crate::core::models::type_def::{Species, TypeDefinition};
use tracing::{debug, trace};

/// The result of scanning for the type table.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TypeTable {
    pub type_count: Option<usize>,
    pub definitions: Vec<TypeDefinition>,
    pub section_start: usize, // Index of the first line mentioning `ntyp`, 0 if none
}

impl TypeTable {
    /// The table of a file with no `ntyp` line: zero types, starting at line 0.
    fn absent() -> Self {
        Self {
            type_count: Some(0),
            definitions: Vec::new(),
            section_start: 0,
        }
    }
}

struct RecordHeader<'a> {
    label: &'a str,
    species_count: usize,
    muffin_tin_radius: f64,
    external_field: f64,
    max_angular_momentum: i32,
}

fn parse_record_header<'a>(tokens: &[&'a str]) -> Option<RecordHeader<'a>> {
    Some(RecordHeader {
        label: tokens[0],
        species_count: tokens[1].parse().ok()?,
        muffin_tin_radius: tokens[2].parse().ok()?,
        external_field: tokens[3].parse().ok()?,
        max_angular_momentum: tokens[4].parse().ok()?,
    })
}

/// Reads up to `count` `(anclr, conc)` lines starting at `index`.
///
/// Lines that fail to parse are skipped without counting. Returns the species
/// read and the index just past the last line consumed.
fn read_species(lines: &[&str], mut index: usize, count: usize) -> (Vec<Species>, usize) {
    let mut species = Vec::new();
    while species.len() < count && index < lines.len() {
        let cleaned = lines[index].replace('\t', " ");
        index += 1;
        if is_comment_or_blank(&cleaned) {
            continue;
        }
        let mut tokens = cleaned.split_whitespace();
        let atomic_number = tokens.next().and_then(|t| t.parse::<u32>().ok());
        let concentration = tokens.next().and_then(|t| t.parse::<f64>().ok());
        match (atomic_number, concentration) {
            (Some(z), Some(conc)) => species.push(Species::new(z, conc)),
            _ => trace!(line = index, "Skipping unreadable species line: {:?}", cleaned.trim()),
        }
    }
    (species, index)
}

/// Locates the `ntyp` declaration and reads the type-definition records that
/// follow the `typ ... ncmp` column header.
///
/// Malformed lines are skipped, never reported as errors. When no count is
/// declared, records are read until a `natm`/`atmicx` line or end of input,
/// and the count becomes the number of definitions read. A declared count of
/// 0 reads no records; it does not mean "unbounded".
pub(super) fn parse_type_table(lines: &[&str]) -> TypeTable {
    let Some(start) = lines.iter().position(|l| mentions(l, TYPE_COUNT_KEYWORD)) else {
        debug!("No type-count line found; document has no type table.");
        return TypeTable::absent();
    };

    let mut i = start + 1;
    let mut declared: Option<usize> = None;
    while i < lines.len() {
        let line = lines[i];
        i += 1;
        if is_comment_or_blank(line) {
            continue;
        }
        declared = line.split_whitespace().next().and_then(|t| t.parse().ok());
        if declared.is_none() {
            debug!(line = i, "Unreadable type count: {:?}", line.trim());
        }
        break;
    }

    while i < lines.len() {
        let line = lines[i];
        i += 1;
        if mentions_all(line, &TYPE_HEADER_KEYWORDS) {
            break;
        }
    }

    let mut definitions = Vec::new();
    while i < lines.len() && declared.is_none_or(|n| definitions.len() < n) {
        let line = lines[i];
        if mentions_any(line, &TYPE_TABLE_TERMINATORS) {
            break;
        }
        if is_comment_or_blank(line) {
            i += 1;
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 5 {
            trace!(line = i + 1, "Line is too short for a type record: {:?}", line.trim());
            i += 1;
            continue;
        }
        let Some(record) = parse_record_header(&tokens) else {
            debug!(line = i + 1, "Skipping type record with unreadable fields: {:?}", line.trim());
            i += 1;
            continue;
        };

        let (species, next) = read_species(lines, i + 1, record.species_count);
        i = next;
        if species.len() == record.species_count {
            definitions.push(TypeDefinition::new(
                record.label,
                record.species_count,
                record.muffin_tin_radius,
                record.external_field,
                record.max_angular_momentum,
                species,
            ));
        } else {
            debug!(
                "Type '{}' declares {} species but only {} were read; dropping it.",
                record.label,
                record.species_count,
                species.len()
            );
        }
    }

    let type_count = declared.or(Some(definitions.len()));
    TypeTable {
        type_count,
        definitions,
        section_start: start,
    }
}
