//! # Mendevo
//!
//! Core Mendelian inheritance logic for a three-trait population. It models
//! three genes (fur, ears, teeth) with a normal and a mutant allele each,
//! derives offspring genotypes through Punnett squares, parses textual
//! population specifications, and runs a generational simulation engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Allele, AlleleVariant, GeneId};
