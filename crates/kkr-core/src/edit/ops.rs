use super::error::EditError;
use super::overrides::TypeOverrides;
use crate::core::models::document::Document;
use crate::core::models::position::{AtomicPosition, Coordinates};
use crate::core::models::type_def::TypeDefinition;
use std::collections::HashMap;
use tracing::debug;

impl Document {
    fn relabeled<'m>(
        &self,
        mut lookup: impl FnMut(usize, &AtomicPosition) -> Option<&'m str>,
    ) -> Document {
        let mut next = self.clone();
        let mut changed = 0;
        for (index, position) in next.positions_mut().iter_mut().enumerate() {
            if let Some(label) = lookup(index, position) {
                position.type_label = label.to_string();
                changed += 1;
            }
        }
        debug!("Relabelled {} position(s).", changed);
        next
    }

    /// Replaces the label of the positions at the given 0-based indices.
    ///
    /// Indices past the end of the position table are ignored.
    pub fn replace_by_index(&self, mapping: &HashMap<usize, String>) -> Document {
        self.relabeled(|index, _| mapping.get(&index).map(String::as_str))
    }

    /// Replaces the label of every position whose coordinate text matches a
    /// key exactly. All positions sharing a matched triple are replaced.
    pub fn replace_by_coordinate(&self, mapping: &HashMap<Coordinates, String>) -> Document {
        self.relabeled(|_, position| mapping.get(&position.coordinates).map(String::as_str))
    }

    /// Rewrites every position labelled with a key of `mapping` to the mapped
    /// label. Several old labels may map to one new label.
    pub fn replace_by_label(&self, mapping: &HashMap<String, String>) -> Document {
        self.relabeled(|_, position| mapping.get(&position.type_label).map(String::as_str))
    }

    /// Appends a type definition and increments the stored type count.
    ///
    /// An absent count is taken to be the current number of definitions.
    /// Existing definitions with the same label are kept.
    pub fn add_type_definition(&self, definition: TypeDefinition) -> Document {
        let mut next = self.clone();
        let base = next
            .type_count()
            .unwrap_or(next.type_definitions().len());
        *next.type_count_mut() = Some(base + 1);
        debug!("Adding type definition '{}'.", definition.label);
        next.type_definitions_mut().push(definition);
        next
    }

    /// Applies `overrides` to the first type definition labelled `label`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownLabel`] if no definition has that label.
    pub fn modify_type_definition(
        &self,
        label: &str,
        overrides: &TypeOverrides,
    ) -> Result<Document, EditError> {
        let index = self
            .type_definitions()
            .iter()
            .position(|d| d.label == label)
            .ok_or_else(|| EditError::unknown_label(label))?;

        let mut next = self.clone();
        overrides.apply_to(&mut next.type_definitions_mut()[index]);
        debug!("Modified type definition '{}'.", label);
        Ok(next)
    }

    /// Number of positions labelled `label`.
    pub fn count_by_label(&self, label: &str) -> usize {
        self.positions()
            .iter()
            .filter(|p| p.type_label == label)
            .count()
    }
}
