//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use mendevo::prelude::*;
//!
//! let pool = GenePool::new();
//! assert_eq!(pool.gene(GeneId::Fur).abbreviation(), 'F');
//! ```

pub use crate::errors;
pub use crate::base::{Allele, AlleleVariant, GeneId};
pub use crate::evolution::{cross, litter, PunnettSquare, LITTER_SIZE};
pub use crate::genome::{Gene, GenePair, GenePool, Genotype, GenotypeOptions, Phenotype};
pub use crate::simulation::{
    parse_population_spec, Individual, Population, SeedRecord, Simulation, SimulationConfig,
};
