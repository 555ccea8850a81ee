use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Allele, GeneId};
use crate::errors::GenotypeError;
use crate::genome::{Gene, GenePair, GenePool};

/// The six inherited alleles and at most one mutation request for a new
/// genotype.
///
/// Every allele defaults to the gene's normal allele; the `mutate_*` flags
/// are mutually exclusive, reflecting a single mutation probability draw
/// applied to at most one trait per birth event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GenotypeOptions {
    pub father_fur: Allele,
    pub mother_fur: Allele,
    pub father_ears: Allele,
    pub mother_ears: Allele,
    pub father_teeth: Allele,
    pub mother_teeth: Allele,
    pub mutate_fur: bool,
    pub mutate_ears: bool,
    pub mutate_teeth: bool,
}

impl Default for GenotypeOptions {
    fn default() -> Self {
        Self {
            father_fur: Allele::normal(GeneId::Fur),
            mother_fur: Allele::normal(GeneId::Fur),
            father_ears: Allele::normal(GeneId::Ears),
            mother_ears: Allele::normal(GeneId::Ears),
            father_teeth: Allele::normal(GeneId::Teeth),
            mother_teeth: Allele::normal(GeneId::Teeth),
            mutate_fur: false,
            mutate_ears: false,
            mutate_teeth: false,
        }
    }
}

impl GenotypeOptions {
    fn mutation_flags(&self) -> usize {
        [self.mutate_fur, self.mutate_ears, self.mutate_teeth]
            .iter()
            .filter(|&&f| f)
            .count()
    }
}

/// One individual's complete genetic makeup: the three gene pairs plus an
/// optional marker for a freshly applied mutation.
///
/// Construction builds the three pairs from the supplied alleles first and
/// only then injects the requested mutation through [`GenePair::mutate`], so
/// the inherited-allele state and the injected mutation stay separable and
/// auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genotype {
    fur: GenePair,
    ears: GenePair,
    teeth: GenePair,
    /// The mutant allele introduced at this individual's birth, if any
    mutation: Option<Allele>,
}

impl Genotype {
    /// Build a genotype from a gene pool and construction options.
    ///
    /// # Errors
    /// `ConflictingMutations` if more than one mutate flag is set; a pair
    /// error if any supplied allele does not belong to its gene.
    pub fn new<R: Rng + ?Sized>(
        pool: &GenePool,
        options: &GenotypeOptions,
        rng: &mut R,
    ) -> Result<Self, GenotypeError> {
        if options.mutation_flags() > 1 {
            return Err(GenotypeError::ConflictingMutations);
        }

        let fur = GenePair::new(pool.gene(GeneId::Fur), options.father_fur, options.mother_fur)?;
        let ears = GenePair::new(
            pool.gene(GeneId::Ears),
            options.father_ears,
            options.mother_ears,
        )?;
        let teeth = GenePair::new(
            pool.gene(GeneId::Teeth),
            options.father_teeth,
            options.mother_teeth,
        )?;

        let mut genotype = Self {
            fur,
            ears,
            teeth,
            mutation: None,
        };

        let requested = if options.mutate_fur {
            Some(GeneId::Fur)
        } else if options.mutate_ears {
            Some(GeneId::Ears)
        } else if options.mutate_teeth {
            Some(GeneId::Teeth)
        } else {
            None
        };
        if let Some(id) = requested {
            genotype.mutate(pool.gene(id), rng)?;
        }

        Ok(genotype)
    }

    /// Assemble a genotype from three already-crossed pairs (the birth path).
    ///
    /// # Errors
    /// Fails if a pair was supplied for the wrong slot.
    pub fn from_pairs(
        fur: GenePair,
        ears: GenePair,
        teeth: GenePair,
    ) -> Result<Self, GenotypeError> {
        for (pair, expected) in [(&fur, GeneId::Fur), (&ears, GeneId::Ears), (&teeth, GeneId::Teeth)]
        {
            if pair.gene() != expected {
                return Err(GenotypeError::GeneMismatch {
                    expected,
                    found: pair.gene(),
                });
            }
        }
        Ok(Self {
            fur,
            ears,
            teeth,
            mutation: None,
        })
    }

    /// Apply one fresh mutation to this genotype's pair for `gene`.
    ///
    /// # Errors
    /// `ConflictingMutations` if a mutation was already applied: at most one
    /// of the three pairs may carry a fresh mutation per individual.
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        gene: &Gene,
        rng: &mut R,
    ) -> Result<(), GenotypeError> {
        if self.mutation.is_some() {
            return Err(GenotypeError::ConflictingMutations);
        }
        let mutant = gene.mutant_allele();
        self.pair_mut(gene.id()).mutate(mutant, rng)?;
        self.mutation = Some(mutant);
        Ok(())
    }

    /// The gene pair for `id`.
    #[inline]
    pub fn pair(&self, id: GeneId) -> &GenePair {
        match id {
            GeneId::Fur => &self.fur,
            GeneId::Ears => &self.ears,
            GeneId::Teeth => &self.teeth,
        }
    }

    #[inline]
    fn pair_mut(&mut self, id: GeneId) -> &mut GenePair {
        match id {
            GeneId::Fur => &mut self.fur,
            GeneId::Ears => &mut self.ears,
            GeneId::Teeth => &mut self.teeth,
        }
    }

    /// The mutant allele introduced at this individual's birth, if this
    /// individual is the carrier of a newly applied mutation.
    #[inline]
    pub fn mutation(&self) -> Option<Allele> {
        self.mutation
    }

    /// True if any of the three pairs contains `allele`.
    pub fn has_allele(&self, allele: Allele) -> bool {
        GeneId::ALL.iter().any(|&id| self.pair(id).has_allele(allele))
    }

    /// Concatenated pair abbreviations for diagnostics (e.g. `"FfeeTt"`).
    ///
    /// Pairs of genes without a dominance relationship contribute an empty
    /// segment. The format is not guaranteed stable.
    pub fn abbreviation(&self, pool: &GenePool) -> String {
        let mut code = String::with_capacity(6);
        for id in GeneId::ALL {
            code.push_str(&self.pair(id).abbreviation(pool.gene(id)));
        }
        code
    }
}
