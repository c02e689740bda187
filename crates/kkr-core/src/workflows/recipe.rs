use crate::core::models::document::Document;
use crate::core::models::position::Coordinates;
use crate::core::models::type_def::TypeDefinition;
use crate::edit::error::EditError;
use crate::edit::mixing::SiteMixture;
use crate::edit::overrides::TypeOverrides;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// One edit applied by [`run`].
#[derive(Debug, Clone, PartialEq)]
pub enum EditStep {
    ReplaceByIndex(HashMap<usize, String>),
    ReplaceByCoordinate(HashMap<Coordinates, String>),
    ReplaceByLabel(HashMap<String, String>),
    AddType(TypeDefinition),
    ModifyType {
        label: String,
        overrides: TypeOverrides,
    },
    MixSite(SiteMixture),
}

impl EditStep {
    pub fn name(&self) -> &'static str {
        match self {
            EditStep::ReplaceByIndex(_) => "replace-index",
            EditStep::ReplaceByCoordinate(_) => "replace-coordinate",
            EditStep::ReplaceByLabel(_) => "relabel",
            EditStep::AddType(_) => "add-type",
            EditStep::ModifyType { .. } => "modify-type",
            EditStep::MixSite(_) => "mix",
        }
    }

    pub fn apply(&self, document: &Document) -> Result<Document, EditError> {
        match self {
            EditStep::ReplaceByIndex(mapping) => Ok(document.replace_by_index(mapping)),
            EditStep::ReplaceByCoordinate(mapping) => Ok(document.replace_by_coordinate(mapping)),
            EditStep::ReplaceByLabel(mapping) => Ok(document.replace_by_label(mapping)),
            EditStep::AddType(definition) => Ok(document.add_type_definition(definition.clone())),
            EditStep::ModifyType { label, overrides } => {
                document.modify_type_definition(label, overrides)
            }
            EditStep::MixSite(mixture) => document.mix_site(mixture),
        }
    }
}

/// An ordered list of edits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRecipe {
    steps: Vec<EditStep>,
}

impl EditRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: EditStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn push(&mut self, step: EditStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[EditStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromIterator<EditStep> for EditRecipe {
    fn from_iter<I: IntoIterator<Item = EditStep>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Applies every step of `recipe` in order and returns the edited copy.
///
/// Stops at the first failing step; `document` itself is never modified.
#[instrument(skip_all, name = "edit_recipe")]
pub fn run(document: &Document, recipe: &EditRecipe) -> Result<Document, EditError> {
    info!("Applying {} edit step(s).", recipe.steps().len());
    let mut current = document.clone();
    for (i, step) in recipe.steps().iter().enumerate() {
        debug!("Step {}: {}", i + 1, step.name());
        current = step.apply(&current)?;
    }

    let unresolved = current.unresolved_labels();
    if !unresolved.is_empty() {
        info!(
            "Labels without a type definition will be written without one: {:?}",
            unresolved
        );
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composition::Composition;
    use crate::core::models::type_def::Species;
    use crate::testing::ybco;

    #[test]
    fn empty_recipe_returns_an_equal_copy() {
        let doc = ybco();
        assert_eq!(run(&doc, &EditRecipe::new()).unwrap(), doc);
    }

    #[test]
    fn steps_apply_in_order() {
        let doc = ybco();
        let recipe = EditRecipe::new()
            .step(EditStep::AddType(TypeDefinition::with_species(
                "Fe_new",
                0.0,
                0.0,
                2,
                vec![Species::new(26, 100.0)],
            )))
            .step(EditStep::ReplaceByLabel(HashMap::from([(
                "Ba_2t_0".to_string(),
                "Fe_new".to_string(),
            )])))
            .step(EditStep::ReplaceByIndex(HashMap::from([(0, "Cu_1a_5".to_string())])));

        let edited = run(&doc, &recipe).unwrap();
        assert_eq!(edited.positions()[0].type_label, "Cu_1a_5");
        assert_eq!(edited.positions()[1].type_label, "Fe_new");
        assert_eq!(edited.type_count(), Some(9));
        assert_eq!(doc.count_by_label("Ba_2t_0"), 2);
    }

    #[test]
    fn first_failing_step_aborts() {
        let recipe: EditRecipe = [
            EditStep::ModifyType {
                label: "Missing".into(),
                overrides: TypeOverrides::new().max_angular_momentum(3),
            },
            EditStep::ReplaceByLabel(HashMap::new()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            run(&ybco(), &recipe).unwrap_err(),
            EditError::unknown_label("Missing")
        );
    }

    #[test]
    fn mix_step_is_applied() {
        let composition = Composition::from_weights(&[39, 57], &[3.0, 1.0]).unwrap();
        let recipe = EditRecipe::new().step(EditStep::MixSite(SiteMixture::new("Y_1h_2", composition)));
        let edited = run(&ybco(), &recipe).unwrap();
        let def = edited.type_definition("Y_1h_2_mix").unwrap();
        assert_eq!(def.species, vec![Species::new(39, 75.0), Species::new(57, 25.0)]);
    }

    #[test]
    fn step_names_match_recipe_kinds() {
        assert_eq!(EditStep::ReplaceByLabel(HashMap::new()).name(), "relabel");
        assert_eq!(EditStep::ReplaceByCoordinate(HashMap::new()).name(), "replace-coordinate");
    }
}
