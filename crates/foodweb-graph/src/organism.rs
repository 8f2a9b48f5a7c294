//! The organism node type.
//!
//! An organism is a node in the food web. Its out-edges are positional
//! indices into the web's organism sequence, so an `Organism` is only
//! meaningful in the context of the web that owns it.

use serde::{Deserialize, Serialize};

/// A single organism and the indices of everything it eats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    /// Display name, as entered by the user.
    pub name: String,

    /// Indices of this organism's prey within the owning web.
    /// No duplicates, never the organism's own index.
    pub prey: Vec<usize>,
}

impl Organism {
    /// Creates an organism with no prey.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prey: Vec::new(),
        }
    }

    /// A producer eats nothing (out-degree 0).
    pub fn is_producer(&self) -> bool {
        self.prey.is_empty()
    }

    /// Number of prey (out-degree).
    pub fn prey_count(&self) -> usize {
        self.prey.len()
    }

    /// Whether this organism already preys on `index`.
    pub fn eats(&self, index: usize) -> bool {
        self.prey.contains(&index)
    }
}
