//! Read-only analyses over a food web.
//!
//! Everything in this module answers a question about the current web
//! without changing it: who sits at the top, who produces, who is
//! eaten the most, how tall each prey chain is, and how each organism
//! classifies by diet.

use crate::error::WebError;
use crate::web::FoodWeb;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Diet classification of every organism, by index.
///
/// The four predicates are computed independently over the whole web.
/// They are not mutually exclusive by construction: a mixed-diet
/// organism can satisfy more than one, and that overlap is deliberate
/// (each list answers its own question, see the predicate docs on
/// [`FoodWeb::vore_report`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoreReport {
    /// Out-degree 0.
    pub producers: Vec<usize>,
    /// Eats something, and everything it eats is a producer.
    pub herbivores: Vec<usize>,
    /// Eats at least one producer and at least one non-producer.
    pub omnivores: Vec<usize>,
    /// Eats something, and nothing it eats is a producer.
    pub carnivores: Vec<usize>,
}

impl FoodWeb {
    /// Organisms nothing else preys on (in-degree 0), in index order.
    pub fn apex_predators(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.in_degree(i) == 0)
            .collect()
    }

    /// Organisms that eat nothing (out-degree 0), in index order.
    pub fn producers(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| self.get(i).is_some_and(|o| o.is_producer()))
            .collect()
    }

    /// Organisms whose out-degree equals the web's maximum out-degree.
    ///
    /// Ties all qualify. On an empty web the result is empty.
    pub fn most_flexible_eaters(&self) -> Vec<usize> {
        let max = self
            .organisms()
            .map(|o| o.prey_count())
            .max()
            .unwrap_or(0);
        (0..self.len())
            .filter(|&i| self.get(i).is_some_and(|o| o.prey_count() == max))
            .collect()
    }

    /// Organisms whose in-degree equals the web's maximum in-degree.
    ///
    /// Ties all qualify. On a web with no relations every organism has
    /// in-degree 0 and all of them are reported.
    pub fn tastiest_food(&self) -> Vec<usize> {
        let counts: Vec<usize> = (0..self.len()).map(|i| self.in_degree(i)).collect();
        let max = counts.iter().copied().max().unwrap_or(0);
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == max)
            .map(|(i, _)| i)
            .collect()
    }

    /// Longest prey chain below each organism.
    ///
    /// Producers have height 0; everything else is one more than the
    /// tallest of its prey. Computed by iterative relaxation: raise
    /// heights pass by pass until a full pass changes nothing.
    ///
    /// On an acyclic web every height is less than the organism count,
    /// so the fixed point is reached within that many passes. A pass
    /// that still raises something after that means the web has a
    /// predation cycle and heights are undefined.
    pub fn heights(&self) -> Result<Vec<usize>, WebError> {
        let n = self.len();
        let mut height = vec![0usize; n];

        for pass in 0..n {
            let mut changed = false;
            for (i, org) in self.organisms().enumerate() {
                let tallest_prey = org
                    .prey
                    .iter()
                    .map(|&p| height[p] + 1)
                    .max()
                    .unwrap_or(0);
                if height[i] < tallest_prey {
                    height[i] = tallest_prey;
                    changed = true;
                }
            }
            trace!(pass, changed, "height relaxation pass");
            if !changed {
                return Ok(height);
            }
        }

        // n passes without convergence: some height exceeded n - 1,
        // which only a cycle can produce.
        if n == 0 {
            Ok(height)
        } else {
            Err(WebError::CyclicWeb)
        }
    }

    /// Classifies every organism by diet.
    ///
    /// Each of the four predicates is evaluated on its own:
    /// - producer: eats nothing;
    /// - herbivore: eats something, and every prey is a producer;
    /// - omnivore: eats at least one producer and one non-producer;
    /// - carnivore: eats something, and no prey is a producer.
    pub fn vore_report(&self) -> VoreReport {
        let mut report = VoreReport::default();

        for (i, org) in self.organisms().enumerate() {
            let eats_producer = org
                .prey
                .iter()
                .any(|&p| self.get(p).is_some_and(|o| o.is_producer()));
            let eats_non_producer = org
                .prey
                .iter()
                .any(|&p| self.get(p).is_some_and(|o| !o.is_producer()));

            if org.is_producer() {
                report.producers.push(i);
            }
            if !org.is_producer() && !eats_non_producer {
                report.herbivores.push(i);
            }
            if eats_producer && eats_non_producer {
                report.omnivores.push(i);
            }
            if !org.is_producer() && !eats_producer {
                report.carnivores.push(i);
            }
        }

        report
    }
}
