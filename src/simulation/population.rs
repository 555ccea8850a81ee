//! Population containers for simulation runs.

use std::sync::Arc;

use crate::errors::GenePairError;
use crate::genome::{GenePool, Genotype, Phenotype};

/// One organism: an identifier and its genotype.
///
/// The `id` is stored in an `Arc<str>` so cloning individuals is cheap. The
/// phenotype is derived on demand rather than cached, because it depends on
/// the pool's current dominance state.
#[derive(Debug, Clone)]
pub struct Individual {
    id: Arc<str>,
    genotype: Genotype,
}

impl Individual {
    /// Create an individual from an id and genotype.
    pub fn new(id: impl Into<Arc<str>>, genotype: Genotype) -> Self {
        Self {
            id: id.into(),
            genotype,
        }
    }

    /// The individual's identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Borrow the genotype (read-only).
    #[inline]
    pub fn genotype(&self) -> &Genotype {
        &self.genotype
    }

    /// Derive the observable traits against the pool's current dominance.
    pub fn phenotype(&self, pool: &GenePool) -> Result<Phenotype, GenePairError> {
        Phenotype::derive(&self.genotype, pool)
    }
}

/// A generation-counted collection of individuals.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create a population from individuals, at generation zero.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// The current generation number.
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The number of individuals.
    #[inline]
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// True if no individuals remain.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// All individuals as a slice.
    #[inline]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// A specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Replace the individuals and advance the generation counter.
    pub fn advance(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
        self.generation += 1;
    }
}
