use serde::{Deserialize, Serialize};

use crate::base::{Allele, GeneId};
use crate::errors::GenePairError;
use crate::genome::{GenePool, Genotype};

/// The three observable traits of one individual.
///
/// A phenotype is a pure derivation of a genotype against the pool's
/// dominance state at construction time; it is not independently mutable.
/// The view layer selects visual representations through the boolean
/// predicates; the core knows nothing about rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phenotype {
    fur: Allele,
    ears: Allele,
    teeth: Allele,
}

impl Phenotype {
    /// Derive the visible allele of each gene pair.
    ///
    /// # Errors
    /// Propagates `DominanceUndetermined` if a heterozygous pair exists for
    /// a gene with no dominance relationship (a precondition violation).
    pub fn derive(genotype: &Genotype, pool: &GenePool) -> Result<Self, GenePairError> {
        Ok(Self {
            fur: genotype
                .pair(GeneId::Fur)
                .visible_allele(pool.gene(GeneId::Fur))?,
            ears: genotype
                .pair(GeneId::Ears)
                .visible_allele(pool.gene(GeneId::Ears))?,
            teeth: genotype
                .pair(GeneId::Teeth)
                .visible_allele(pool.gene(GeneId::Teeth))?,
        })
    }

    /// The visible allele for `gene`.
    #[inline]
    pub fn allele(&self, gene: GeneId) -> Allele {
        match gene {
            GeneId::Fur => self.fur,
            GeneId::Ears => self.ears,
            GeneId::Teeth => self.teeth,
        }
    }

    /// True if the visible trait for `gene` is the mutant form.
    #[inline]
    pub fn is_mutant(&self, gene: GeneId) -> bool {
        self.allele(gene).is_mutant()
    }

    /// White (wild-type) fur is visible.
    #[inline]
    pub fn has_normal_fur(&self) -> bool {
        self.fur.is_normal()
    }

    /// Brown (mutant) fur is visible.
    #[inline]
    pub fn has_mutant_fur(&self) -> bool {
        self.fur.is_mutant()
    }

    /// Straight (wild-type) ears are visible.
    #[inline]
    pub fn has_normal_ears(&self) -> bool {
        self.ears.is_normal()
    }

    /// Floppy (mutant) ears are visible.
    #[inline]
    pub fn has_mutant_ears(&self) -> bool {
        self.ears.is_mutant()
    }

    /// Short (wild-type) teeth are visible.
    #[inline]
    pub fn has_normal_teeth(&self) -> bool {
        self.teeth.is_normal()
    }

    /// Long (mutant) teeth are visible.
    #[inline]
    pub fn has_mutant_teeth(&self) -> bool {
        self.teeth.is_mutant()
    }
}
