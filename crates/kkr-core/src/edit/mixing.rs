use super::error::EditError;
use crate::core::composition::Composition;
use crate::core::models::document::Document;
use crate::core::models::type_def::TypeDefinition;
use std::collections::HashMap;
use tracing::info;

/// Replaces one site type with a new multi-species (CPA) type.
///
/// The new type inherits `rmt`, `field` and `mxl` from the first definition
/// labelled `target_label` unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteMixture {
    pub target_label: String,
    pub new_label: Option<String>,
    pub composition: Composition,
    pub muffin_tin_radius: Option<f64>,
    pub external_field: Option<f64>,
    pub max_angular_momentum: Option<i32>,
}

impl SiteMixture {
    pub fn new(target_label: impl Into<String>, composition: Composition) -> Self {
        Self {
            target_label: target_label.into(),
            new_label: None,
            composition,
            muffin_tin_radius: None,
            external_field: None,
            max_angular_momentum: None,
        }
    }

    pub fn with_new_label(mut self, label: impl Into<String>) -> Self {
        self.new_label = Some(label.into());
        self
    }

    /// The label given to the mixed type, `"{target}_mix"` by default.
    pub fn resolved_label(&self) -> String {
        self.new_label
            .clone()
            .unwrap_or_else(|| format!("{}_mix", self.target_label))
    }
}

impl Document {
    /// Adds the mixed type described by `mixture` and moves every position
    /// labelled `target_label` onto it.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownLabel`] if the target has no definition to
    /// inherit from.
    pub fn mix_site(&self, mixture: &SiteMixture) -> Result<Document, EditError> {
        let reference = self
            .type_definitions()
            .iter()
            .find(|d| d.label == mixture.target_label)
            .ok_or_else(|| EditError::unknown_label(&mixture.target_label))?;

        let label = mixture.resolved_label();
        let definition = TypeDefinition::with_species(
            label.clone(),
            mixture
                .muffin_tin_radius
                .unwrap_or(reference.muffin_tin_radius),
            mixture.external_field.unwrap_or(reference.external_field),
            mixture
                .max_angular_momentum
                .unwrap_or(reference.max_angular_momentum),
            mixture.composition.to_species(),
        );
        info!(
            "Mixing {} component(s) onto '{}' as '{}'.",
            mixture.composition.len(),
            mixture.target_label,
            label
        );

        let mapping = HashMap::from([(mixture.target_label.clone(), label)]);
        Ok(self.add_type_definition(definition).replace_by_label(&mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::type_def::Species;
    use crate::testing::ybco;

    fn yttrium_lanthanum() -> Composition {
        Composition::from_weights(&[39, 57], &[1.0, 1.0]).unwrap()
    }

    #[test]
    fn mix_site_adds_type_and_relabels_target() {
        let doc = ybco();
        let mixed = doc
            .mix_site(&SiteMixture::new("Y_1h_2", yttrium_lanthanum()))
            .unwrap();

        assert_eq!(mixed.count_by_label("Y_1h_2"), 0);
        assert_eq!(mixed.count_by_label("Y_1h_2_mix"), 1);
        let def = mixed.type_definition("Y_1h_2_mix").unwrap();
        assert_eq!(def.species_count, 2);
        assert_eq!(def.species, vec![Species::new(39, 50.0), Species::new(57, 50.0)]);
        assert_eq!(def.max_angular_momentum, 2);
        assert_eq!(mixed.type_count(), Some(9));
        assert_eq!(doc.count_by_label("Y_1h_2"), 1);
    }

    #[test]
    fn mix_site_honours_label_and_overrides() {
        let mut mixture = SiteMixture::new("Ba_2t_0", yttrium_lanthanum()).with_new_label("Ba_mix");
        mixture.max_angular_momentum = Some(3);
        mixture.muffin_tin_radius = Some(1.8);

        let mixed = ybco().mix_site(&mixture).unwrap();
        assert_eq!(mixed.count_by_label("Ba_mix"), 2);
        let def = mixed.type_definition("Ba_mix").unwrap();
        assert_eq!(def.max_angular_momentum, 3);
        assert_eq!(def.muffin_tin_radius, 1.8);
        assert_eq!(def.external_field, 0.0);
    }

    #[test]
    fn mix_site_requires_a_reference_definition() {
        let err = ybco()
            .mix_site(&SiteMixture::new("La_1h_2", yttrium_lanthanum()))
            .unwrap_err();
        assert_eq!(err, EditError::unknown_label("La_1h_2"));
    }
}
