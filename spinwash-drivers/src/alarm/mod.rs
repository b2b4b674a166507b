//! Completion alarm outputs

pub mod annunciator;

pub use annunciator::Annunciator;
