//! # reef-compat
//!
//! Turns a set of livestock entries into a deduplicated, severity-ranked
//! compatibility report.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`dataset`] | Species-traits JSON loading, id assignment, process-wide index |
//! | [`resolver`] | Specificity-ordered prefix matching of names to trait records |
//! | [`rules`] | Fixed tables of per-entity, pairwise and group rules |
//! | [`engine`] | Resolution + rule sequencing + deduplication into reports |
//! | [`water`] | Water-type admission check for a single species |

pub mod dataset;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod water;

pub use engine::{Evaluator, Resolution};
pub use error::CompatError;
pub use resolver::{TraitFilter, TraitIndex};

#[cfg(test)]
mod test_support;
