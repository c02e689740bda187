use super::position::AtomicPosition;
use super::type_def::TypeDefinition;
use std::collections::{HashMap, HashSet};

/// A parsed input file: verbatim header and footer text around a structured
/// type table and position table.
///
/// A `Document` is a value. It is produced by the reader or by one of the
/// edit operations in [`crate::edit`], each of which returns a fresh copy and
/// leaves its input untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    header: Vec<String>,                   // Lines preceding the type-count section
    type_count: Option<usize>,             // Declared ntyp, if any
    type_definitions: Vec<TypeDefinition>, // Type table in file order
    position_header: Vec<String>,          // Marker and comment lines of the position section
    positions: Vec<AtomicPosition>,        // Position table in file order
    footer: Vec<String>,                   // End marker and everything after it
}

impl Document {
    pub(crate) fn from_parts(
        header: Vec<String>,
        type_count: Option<usize>,
        type_definitions: Vec<TypeDefinition>,
        position_header: Vec<String>,
        positions: Vec<AtomicPosition>,
        footer: Vec<String>,
    ) -> Self {
        Self {
            header,
            type_count,
            type_definitions,
            position_header,
            positions,
            footer,
        }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The stored `ntyp`. The writer does not use it; it recomputes the count
    /// from the labels actually referenced by positions.
    pub fn type_count(&self) -> Option<usize> {
        self.type_count
    }

    pub fn type_definitions(&self) -> &[TypeDefinition] {
        &self.type_definitions
    }

    pub fn position_header(&self) -> &[String] {
        &self.position_header
    }

    pub fn positions(&self) -> &[AtomicPosition] {
        &self.positions
    }

    pub fn footer(&self) -> &[String] {
        &self.footer
    }

    /// Resolves a label the way the writer does: the last definition with
    /// that label wins.
    pub fn type_definition(&self, label: &str) -> Option<&TypeDefinition> {
        self.type_definitions.iter().rev().find(|d| d.label == label)
    }

    /// Distinct position labels in order of first appearance.
    pub fn used_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.positions
            .iter()
            .map(|p| p.type_label.as_str())
            .filter(|label| seen.insert(*label))
            .collect()
    }

    /// The definitions a written file will contain: one per used label that
    /// resolves to a definition, in order of first use. Labels with no
    /// definition are skipped.
    pub fn referenced_type_definitions(&self) -> Vec<&TypeDefinition> {
        let by_label: HashMap<&str, &TypeDefinition> = self
            .type_definitions
            .iter()
            .map(|d| (d.label.as_str(), d))
            .collect();
        self.used_labels()
            .into_iter()
            .filter_map(|label| by_label.get(label).copied())
            .collect()
    }

    /// Used labels that have no type definition.
    pub fn unresolved_labels(&self) -> Vec<&str> {
        self.used_labels()
            .into_iter()
            .filter(|label| self.type_definition(label).is_none())
            .collect()
    }

    pub(crate) fn type_count_mut(&mut self) -> &mut Option<usize> {
        &mut self.type_count
    }

    pub(crate) fn type_definitions_mut(&mut self) -> &mut Vec<TypeDefinition> {
        &mut self.type_definitions
    }

    pub(crate) fn positions_mut(&mut self) -> &mut Vec<AtomicPosition> {
        &mut self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::type_def::Species;

    fn definition(label: &str, z: u32) -> TypeDefinition {
        TypeDefinition::with_species(label, 0.0, 0.0, 2, vec![Species::new(z, 100.0)])
    }

    fn sample() -> Document {
        Document::from_parts(
            vec!["c header".into()],
            Some(3),
            vec![definition("Ba", 56), definition("Cu", 29), definition("O", 8)],
            vec!["c atmicx atmtyp".into()],
            vec![
                AtomicPosition::new("0a", "0b", "0c", "Cu"),
                AtomicPosition::new("0.5a", "0.5b", "0.5c", "Ba"),
                AtomicPosition::new("0a", "0.5b", "0c", "Cu"),
                AtomicPosition::new("0a", "0b", "0.5c", "Vac"),
            ],
            vec!["end".into()],
        )
    }

    #[test]
    fn used_labels_are_distinct_in_first_use_order() {
        let doc = sample();
        assert_eq!(doc.used_labels(), vec!["Cu", "Ba", "Vac"]);
    }

    #[test]
    fn referenced_definitions_skip_unused_and_unresolved_labels() {
        let doc = sample();
        let labels: Vec<_> = doc
            .referenced_type_definitions()
            .iter()
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Cu", "Ba"]);
        assert_eq!(doc.unresolved_labels(), vec!["Vac"]);
    }

    #[test]
    fn duplicate_labels_resolve_to_last_definition() {
        let mut doc = sample();
        doc.type_definitions_mut().push(definition("Cu", 47));
        assert_eq!(doc.type_definition("Cu").unwrap().species[0].atomic_number, 47);
        assert_eq!(
            doc.referenced_type_definitions()[0].species[0].atomic_number,
            47
        );
    }

    #[test]
    fn default_document_is_empty() {
        let doc = Document::default();
        assert!(doc.positions().is_empty());
        assert!(doc.type_definitions().is_empty());
        assert_eq!(doc.type_count(), None);
    }
}
