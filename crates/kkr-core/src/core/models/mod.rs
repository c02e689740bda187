pub mod document;
pub mod position;
pub mod type_def;
