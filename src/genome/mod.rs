//! Genome structures: genes, gene pairs, genotypes, and phenotypes.

mod gene;
mod gene_pair;
mod gene_pool;
mod genotype;
mod phenotype;

pub use gene::Gene;
pub use gene_pair::GenePair;
pub use gene_pool::GenePool;
pub use genotype::{Genotype, GenotypeOptions};
pub use phenotype::Phenotype;
