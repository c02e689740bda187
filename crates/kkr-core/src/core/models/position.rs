use serde::Serialize;
use std::fmt;

/// The coordinate text of a lattice site.
///
/// Values are never interpreted numerically: entries such as `0.5a` keep
/// their solver-specific unit suffix, and equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinates {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl Coordinates {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A lattice site and the label of the type definition occupying it.
///
/// The label is resolved by name when the document is written; it may name a
/// type that the document does not define.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AtomicPosition {
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub type_label: String,
}

impl AtomicPosition {
    pub fn new(
        x: impl Into<String>,
        y: impl Into<String>,
        z: impl Into<String>,
        type_label: impl Into<String>,
    ) -> Self {
        Self {
            coordinates: Coordinates::new(x, y, z),
            type_label: type_label.into(),
        }
    }

    pub fn x(&self) -> &str {
        &self.coordinates.x
    }

    pub fn y(&self) -> &str {
        &self.coordinates.y
    }

    pub fn z(&self) -> &str {
        &self.coordinates.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_compare_as_text() {
        let a = Coordinates::new("0.5a", "0.5b", "0.5c");
        let b = Coordinates::new("0.50a", "0.5b", "0.5c");
        assert_ne!(a, b);
        assert_eq!(a, Coordinates::new("0.5a", "0.5b", "0.5c"));
    }

    #[test]
    fn coordinates_display_as_tuple() {
        let c = Coordinates::new("0.0a", "0.5b", "0.18c");
        assert_eq!(c.to_string(), "(0.0a, 0.5b, 0.18c)");
    }
}
