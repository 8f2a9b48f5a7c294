//! Error types for web mutations and analyses.

use thiserror::Error;

/// Things that can go wrong when mutating or analyzing a food web.
///
/// Mutation errors are validation failures: the operation is skipped
/// and the web is left untouched. `CyclicWeb` is the one analysis
/// error; it replaces what would otherwise be a non-terminating
/// height relaxation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// Relation indices out of range, or predator equals prey.
    #[error("Invalid predator and/or prey index. No relation added to the food web.")]
    InvalidRelation,

    /// The predator already lists this prey.
    #[error("Duplicate predator/prey relation. No relation added to the food web.")]
    DuplicateRelation,

    /// Removal index out of range.
    #[error("Invalid extinction index. No organism removed from the food web.")]
    InvalidExtinction,

    /// The web contains a predation cycle, so heights are undefined.
    #[error("The food web contains a predation cycle; heights are undefined.")]
    CyclicWeb,
}
