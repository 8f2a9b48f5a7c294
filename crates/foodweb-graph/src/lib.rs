//! Foodweb Graph - Food web modeling and analysis
//!
//! This crate manages a small directed graph of organisms and their
//! predator/prey relations. It provides the mutation operations
//! (expansion, supplementation, extinction) and the read-only analyses
//! (apex predators, producers, heights, vore types) that the CLI
//! reports on.
//!
//! # Architecture
//!
//! The web stores organisms in insertion order and encodes edges as
//! positional indices into that same sequence. Indices are the sole
//! means of reference: removing an organism shifts every later organism
//! down by one and renumbers every surviving prey entry accordingly.
//!
//! # Example
//!
//! ```
//! use foodweb_graph::FoodWeb;
//!
//! let mut web = FoodWeb::new();
//! web.add_organism("Hawk");
//! web.add_organism("Rabbit");
//! web.add_relation(0, 1).unwrap();
//!
//! assert_eq!(web.apex_predators(), vec![0]);
//! assert_eq!(web.producers(), vec![1]);
//! ```

mod analysis;
mod error;
mod organism;
mod web;

pub use analysis::VoreReport;
pub use error::WebError;
pub use organism::Organism;
pub use web::FoodWeb;
