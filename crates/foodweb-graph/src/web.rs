//! Core food web data structure.
//!
//! The FoodWeb owns every organism and is the only thing allowed to
//! mutate prey lists, which keeps the positional-index invariant in
//! one place: every prey index is in range and never equal to its
//! owner's index.

use crate::error::WebError;
use crate::organism::Organism;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The predator/prey relationship graph.
///
/// Organisms live in insertion order and are referred to by position.
/// Removal is the one operation that breaks positions: it compacts the
/// sequence and renumbers every surviving prey entry, so any index
/// captured before a removal is invalid afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodWeb {
    organisms: Vec<Organism>,
}

impl FoodWeb {
    /// Creates a new empty web.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an organism with an empty prey list.
    ///
    /// Returns the new organism's index.
    pub fn add_organism(&mut self, name: impl Into<String>) -> usize {
        let org = Organism::new(name);
        debug!(name = %org.name, index = self.organisms.len(), "adding organism");
        self.organisms.push(org);
        self.organisms.len() - 1
    }

    /// Records that `predator` eats `prey`.
    ///
    /// Fails if either index is out of range, the two are equal, or the
    /// relation already exists. The web is untouched on failure.
    pub fn add_relation(&mut self, predator: usize, prey: usize) -> Result<(), WebError> {
        let n = self.organisms.len();
        if predator >= n || prey >= n || predator == prey {
            return Err(WebError::InvalidRelation);
        }
        if self.organisms[predator].eats(prey) {
            return Err(WebError::DuplicateRelation);
        }

        debug!(predator, prey, "adding relation");
        self.organisms[predator].prey.push(prey);
        Ok(())
    }

    /// Removes the organism at `index` and repairs every surviving
    /// prey list.
    ///
    /// Later organisms shift down by one. Each survivor first drops any
    /// prey entry equal to `index`, then decrements any entry greater
    /// than `index`. The drop must happen before the decrement or an
    /// entry equal to `index + 1` would be misread as the removed one.
    ///
    /// Returns the removed organism on success.
    pub fn remove_organism(&mut self, index: usize) -> Result<Organism, WebError> {
        if index >= self.organisms.len() {
            return Err(WebError::InvalidExtinction);
        }

        let removed = self.organisms.remove(index);
        debug!(name = %removed.name, index, "removed organism");

        for org in &mut self.organisms {
            org.prey.retain(|&p| p != index);
            for p in &mut org.prey {
                if *p > index {
                    *p -= 1;
                }
            }
        }

        Ok(removed)
    }

    /// Number of organisms in the web.
    pub fn len(&self) -> usize {
        self.organisms.len()
    }

    /// Whether the web has no organisms.
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Gets an organism by index.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    /// Iterates over all organisms in index order.
    pub fn organisms(&self) -> impl Iterator<Item = &Organism> {
        self.organisms.iter()
    }

    /// Number of distinct predators that eat the organism at `index`.
    ///
    /// Prey lists hold no duplicates, so counting entries counts
    /// predators.
    pub fn in_degree(&self, index: usize) -> usize {
        self.organisms
            .iter()
            .filter(|org| org.eats(index))
            .count()
    }
}

impl fmt::Display for FoodWeb {
    /// Renders the predator/prey listing, one organism per line:
    /// `  (0) Hawk eats Rabbit, Snake`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, org) in self.organisms.iter().enumerate() {
            write!(f, "  ({}) {}", i, org.name)?;
            if !org.prey.is_empty() {
                write!(f, " eats ")?;
                for (j, &p) in org.prey.iter().enumerate() {
                    if j > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.organisms[p].name)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> FoodWeb {
        // A eats B, B eats C
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.add_organism("B");
        web.add_organism("C");
        web.add_relation(0, 1).unwrap();
        web.add_relation(1, 2).unwrap();
        web
    }

    #[test]
    fn test_add_organism_starts_empty() {
        let mut web = FoodWeb::new();
        for name in ["a", "b", "c", "d"] {
            web.add_organism(name);
        }
        assert_eq!(web.len(), 4);
        for org in web.organisms() {
            assert!(org.is_producer());
        }
    }

    #[test]
    fn test_add_relation_rejects_self() {
        let mut web = FoodWeb::new();
        web.add_organism("A");
        assert_eq!(web.add_relation(0, 0), Err(WebError::InvalidRelation));
    }

    #[test]
    fn test_add_relation_rejects_out_of_range() {
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.add_organism("B");
        assert_eq!(web.add_relation(0, 2), Err(WebError::InvalidRelation));
        assert_eq!(web.add_relation(5, 1), Err(WebError::InvalidRelation));
    }

    #[test]
    fn test_add_relation_rejects_duplicate() {
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.add_organism("B");
        assert_eq!(web.add_relation(0, 1), Ok(()));
        assert_eq!(web.add_relation(0, 1), Err(WebError::DuplicateRelation));
        assert_eq!(web.get(0).unwrap().prey, vec![1]);
    }

    #[test]
    fn test_remove_rejects_out_of_range() {
        let mut web = chain();
        assert_eq!(web.remove_organism(3), Err(WebError::InvalidExtinction));
        assert_eq!(web.len(), 3);
    }

    #[test]
    fn test_remove_middle_repairs_indices() {
        let mut web = chain();
        let removed = web.remove_organism(1).unwrap();
        assert_eq!(removed.name, "B");

        // A's only prey was B, so A becomes a producer.
        assert_eq!(web.len(), 2);
        assert_eq!(web.get(0).unwrap().name, "A");
        assert_eq!(web.get(1).unwrap().name, "C");
        assert!(web.get(0).unwrap().is_producer());
        assert!(web.get(1).unwrap().is_producer());
    }

    #[test]
    fn test_remove_decrements_later_indices() {
        // D eats A(0) and C(2); removing B(1) must keep the A edge
        // unchanged and renumber the C edge from 2 to 1.
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.add_organism("B");
        web.add_organism("C");
        web.add_organism("D");
        web.add_relation(3, 0).unwrap();
        web.add_relation(3, 2).unwrap();

        web.remove_organism(1).unwrap();

        let d = web.get(2).unwrap();
        assert_eq!(d.name, "D");
        assert_eq!(d.prey, vec![0, 1]);
        assert!(!web.organisms().any(|o| o.eats(2)));
    }

    #[test]
    fn test_remove_adjacent_index_not_confused_with_removed() {
        // B eats C(2); removing index 1 leaves B gone, but A eats C(2)
        // and that entry must become 1, not vanish.
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.add_organism("B");
        web.add_organism("C");
        web.add_relation(0, 2).unwrap();

        web.remove_organism(1).unwrap();

        assert_eq!(web.get(0).unwrap().prey, vec![1]);
    }

    #[test]
    fn test_remove_last_organism_empties_web() {
        let mut web = FoodWeb::new();
        web.add_organism("A");
        web.remove_organism(0).unwrap();
        assert!(web.is_empty());
    }

    #[test]
    fn test_in_degree_counts_predators() {
        let web = chain();
        assert_eq!(web.in_degree(0), 0);
        assert_eq!(web.in_degree(1), 1);
        assert_eq!(web.in_degree(2), 1);
    }

    #[test]
    fn test_display_listing() {
        let web = chain();
        let listing = web.to_string();
        assert_eq!(listing, "  (0) A eats B\n  (1) B eats C\n  (2) C\n");
    }

    #[test]
    fn test_display_multiple_prey_comma_separated() {
        let mut web = FoodWeb::new();
        web.add_organism("Bear");
        web.add_organism("Fish");
        web.add_organism("Berries");
        web.add_relation(0, 1).unwrap();
        web.add_relation(0, 2).unwrap();
        assert_eq!(
            web.to_string(),
            "  (0) Bear eats Fish, Berries\n  (1) Fish\n  (2) Berries\n"
        );
    }
}
