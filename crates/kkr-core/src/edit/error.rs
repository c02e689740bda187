use crate::core::composition::CompositionError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum EditError {
    #[error("Atom type '{label}' not found in type definitions")]
    UnknownLabel { label: String },

    #[error("Invalid site composition: {source}")]
    Composition {
        #[from]
        source: CompositionError,
    },
}

impl EditError {
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            label: label.into(),
        }
    }
}
