//! # reef-core
//!
//! Core types shared by every reef compatibility crate.
//!
//! This crate provides:
//! - Trait enums (category, water type, temperament, reef safety, diet, size class)
//! - The canonical `SpeciesTraits` record and the `LivestockEntry` input
//! - `ResolvedEntity`, `CompatibilityResult` and `CompatibilityReport`
//! - Severity ordering and composite-key finding deduplication
//! - Trait id slug generation
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
