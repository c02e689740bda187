use serde::Serialize;

/// One chemical species occupying a site, with its concentration in percent.
///
/// An atomic number of `0` denotes a vacancy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Species {
    pub atomic_number: u32,
    pub concentration: f64,
}

impl Species {
    pub fn new(atomic_number: u32, concentration: f64) -> Self {
        Self {
            atomic_number,
            concentration,
        }
    }
}

impl From<(u32, f64)> for Species {
    fn from((atomic_number, concentration): (u32, f64)) -> Self {
        Self::new(atomic_number, concentration)
    }
}

/// A named site specification from the type table (one `ntyp` record).
///
/// Definitions produced by parsing or by the add/modify operations always
/// satisfy `species.len() == species_count`; direct field edits are not
/// re-validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub label: String,             // Key referenced by atomic positions
    pub species_count: usize,      // Declared number of components (ncmp)
    pub muffin_tin_radius: f64,    // 0.0 lets the solver choose (rmt)
    pub external_field: f64,       // External magnetic field (field)
    pub max_angular_momentum: i32, // Angular-momentum cutoff (mxl)
    pub species: Vec<Species>,     // (anclr, conc) pairs
}

impl TypeDefinition {
    pub fn new(
        label: impl Into<String>,
        species_count: usize,
        muffin_tin_radius: f64,
        external_field: f64,
        max_angular_momentum: i32,
        species: Vec<Species>,
    ) -> Self {
        Self {
            label: label.into(),
            species_count,
            muffin_tin_radius,
            external_field,
            max_angular_momentum,
            species,
        }
    }

    /// Builds a definition whose `species_count` is taken from `species`.
    pub fn with_species(
        label: impl Into<String>,
        muffin_tin_radius: f64,
        external_field: f64,
        max_angular_momentum: i32,
        species: Vec<Species>,
    ) -> Self {
        let species_count = species.len();
        Self::new(
            label,
            species_count,
            muffin_tin_radius,
            external_field,
            max_angular_momentum,
            species,
        )
    }

    /// Sum of all species concentrations; expected, not enforced, to be 100.
    pub fn total_concentration(&self) -> f64 {
        self.species.iter().map(|s| s.concentration).sum()
    }

    pub fn is_consistent(&self) -> bool {
        self.species.len() == self.species_count
    }
}
