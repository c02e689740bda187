use crate::core::models::type_def::Species;
use thiserror::Error;

const STICK_EPSILON: f64 = 1e-6;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CompositionError {
    #[error("A composition needs at least one component")]
    Empty,
    #[error("Expected {expected} weight(s) but got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Weight at position {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("Stick-breaking needs at least two components, got {found}")]
    TooFewComponents { found: usize },
}

/// One component of a site composition: an element and its fraction of the
/// site, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub atomic_number: u32,
    pub fraction: f64,
}

/// Normalized fractions of several elements sharing one site.
///
/// Fractions are non-negative and sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    components: Vec<Component>,
}

impl Composition {
    /// Normalizes raw weights into fractions.
    ///
    /// Negative weights count as zero. If no weight is positive, every
    /// component gets an equal share.
    pub fn from_weights(atomic_numbers: &[u32], weights: &[f64]) -> Result<Self, CompositionError> {
        check_lengths(atomic_numbers, weights, atomic_numbers.len())?;

        let clipped: Vec<f64> = weights.iter().map(|w| w.max(0.0)).collect();
        let total: f64 = clipped.iter().sum();
        let n = clipped.len() as f64;
        let fractions = clipped
            .into_iter()
            .map(|w| if total > 0.0 { w / total } else { 1.0 / n });

        Ok(Self::zip(atomic_numbers, fractions))
    }

    /// Builds fractions from `n - 1` stick-breaking parameters.
    ///
    /// Each stick is clipped to `[1e-6, 1 - 1e-6]`; component `k` takes that
    /// share of what is left and the last component takes the remainder.
    /// At least two components are required.
    pub fn from_stick_breaking(
        atomic_numbers: &[u32],
        sticks: &[f64],
    ) -> Result<Self, CompositionError> {
        if atomic_numbers.is_empty() {
            return Err(CompositionError::Empty);
        }
        if atomic_numbers.len() < 2 {
            return Err(CompositionError::TooFewComponents {
                found: atomic_numbers.len(),
            });
        }
        check_lengths(atomic_numbers, sticks, atomic_numbers.len() - 1)?;

        let mut remainder = 1.0;
        let mut fractions = Vec::with_capacity(atomic_numbers.len());
        for stick in sticks {
            let portion = remainder * stick.clamp(STICK_EPSILON, 1.0 - STICK_EPSILON);
            fractions.push(portion);
            remainder -= portion;
        }
        fractions.push(f64::max(remainder, 0.0));

        Ok(Self::zip(atomic_numbers, fractions))
    }

    fn zip(atomic_numbers: &[u32], fractions: impl IntoIterator<Item = f64>) -> Self {
        let components = atomic_numbers
            .iter()
            .zip(fractions)
            .map(|(&atomic_number, fraction)| Component {
                atomic_number,
                fraction,
            })
            .collect();
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Species records with concentrations in percent, rounded to six
    /// decimals.
    pub fn to_species(&self) -> Vec<Species> {
        self.components
            .iter()
            .map(|c| Species::new(c.atomic_number, round6(c.fraction * 100.0)))
            .collect()
    }
}

fn check_lengths(
    atomic_numbers: &[u32],
    values: &[f64],
    expected: usize,
) -> Result<(), CompositionError> {
    if atomic_numbers.is_empty() {
        return Err(CompositionError::Empty);
    }
    if values.len() != expected {
        return Err(CompositionError::LengthMismatch {
            expected,
            found: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(CompositionError::NonFinite { index });
    }
    Ok(())
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
