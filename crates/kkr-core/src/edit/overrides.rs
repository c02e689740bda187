use crate::core::models::type_def::{Species, TypeDefinition};

/// Field overrides for [`Document::modify_type_definition`](crate::core::models::document::Document::modify_type_definition).
///
/// `None` leaves a field unchanged. Replacing `species` without an explicit
/// `species_count` sets the count to the new number of species.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeOverrides {
    pub species: Option<Vec<Species>>,
    pub species_count: Option<usize>,
    pub muffin_tin_radius: Option<f64>,
    pub external_field: Option<f64>,
    pub max_angular_momentum: Option<i32>,
}

impl TypeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, species: Vec<Species>) -> Self {
        self.species = Some(species);
        self
    }
    pub fn species_count(mut self, count: usize) -> Self {
        self.species_count = Some(count);
        self
    }
    pub fn muffin_tin_radius(mut self, rmt: f64) -> Self {
        self.muffin_tin_radius = Some(rmt);
        self
    }
    pub fn external_field(mut self, field: f64) -> Self {
        self.external_field = Some(field);
        self
    }
    pub fn max_angular_momentum(mut self, mxl: i32) -> Self {
        self.max_angular_momentum = Some(mxl);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply_to(&self, definition: &mut TypeDefinition) {
        if let Some(species) = &self.species {
            definition.species = species.clone();
            definition.species_count = species.len();
        }
        if let Some(count) = self.species_count {
            definition.species_count = count;
        }
        if let Some(rmt) = self.muffin_tin_radius {
            definition.muffin_tin_radius = rmt;
        }
        if let Some(field) = self.external_field {
            definition.external_field = field;
        }
        if let Some(mxl) = self.max_angular_momentum {
            definition.max_angular_momentum = mxl;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oxygen() -> TypeDefinition {
        TypeDefinition::with_species("O2_1e_6", 0.0, 0.0, 1, vec![Species::new(8, 100.0)])
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut def = oxygen();
        TypeOverrides::new().apply_to(&mut def);
        assert_eq!(def, oxygen());
        assert!(TypeOverrides::new().is_empty());
    }

    #[test]
    fn species_override_updates_count() {
        let mut def = oxygen();
        TypeOverrides::new()
            .species(vec![Species::new(8, 93.0), Species::new(0, 7.0)])
            .apply_to(&mut def);
        assert_eq!(def.species_count, 2);
        assert_eq!(def.species[1], Species::new(0, 7.0));
    }

    #[test]
    fn explicit_count_wins_over_species_length() {
        let mut def = oxygen();
        TypeOverrides::new()
            .species(vec![Species::new(8, 93.0), Species::new(0, 7.0)])
            .species_count(3)
            .apply_to(&mut def);
        assert_eq!(def.species_count, 3);
    }

    #[test]
    fn zero_values_are_applied_not_ignored() {
        let mut def = TypeDefinition::with_species("Fe", 2.1, 0.5, 3, vec![Species::new(26, 100.0)]);
        TypeOverrides::new()
            .muffin_tin_radius(0.0)
            .external_field(0.0)
            .max_angular_momentum(0)
            .apply_to(&mut def);
        assert_eq!(def.muffin_tin_radius, 0.0);
        assert_eq!(def.external_field, 0.0);
        assert_eq!(def.max_angular_momentum, 0);
    }
}
