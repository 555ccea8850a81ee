use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Allele, GeneId};
use crate::errors::GenePairError;
use crate::genome::Gene;

/// One individual's two alleles (paternal and maternal) for one gene.
///
/// A pair is created when an individual is created, either at population
/// seeding or at birth through a Punnett-square cross. It is mutable only
/// through [`mutate`](GenePair::mutate), which reassigns exactly one of the
/// two sides, and through wholesale replacement at birth.
///
/// Queries that depend on dominance ([`visible_allele`],
/// [`abbreviation`](GenePair::abbreviation)) take the gene by reference and
/// read its *current* dominance state. Dominance is a population-wide fact,
/// so flipping it changes the answer for every existing pair.
///
/// [`visible_allele`]: GenePair::visible_allele
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenePair {
    /// The gene both alleles belong to
    gene: GeneId,
    /// Paternally inherited allele
    father: Allele,
    /// Maternally inherited allele
    mother: Allele,
}

impl GenePair {
    /// Create a pair from a gene and a father/mother allele.
    ///
    /// # Errors
    /// Fails if either allele does not belong to `gene`.
    pub fn new(gene: &Gene, father: Allele, mother: Allele) -> Result<Self, GenePairError> {
        for allele in [father, mother] {
            if !gene.contains(allele) {
                return Err(GenePairError::ForeignAllele {
                    gene: gene.id(),
                    allele,
                });
            }
        }
        Ok(Self {
            gene: gene.id(),
            father,
            mother,
        })
    }

    /// Crate-internal constructor for alleles already validated against the
    /// gene, e.g. when recombining two existing pairs of the same gene.
    #[inline]
    pub(crate) const fn from_validated(gene: GeneId, father: Allele, mother: Allele) -> Self {
        Self {
            gene,
            father,
            mother,
        }
    }

    /// The gene this pair references.
    #[inline]
    pub fn gene(&self) -> GeneId {
        self.gene
    }

    /// The paternally inherited allele.
    #[inline]
    pub fn father_allele(&self) -> Allele {
        self.father
    }

    /// The maternally inherited allele.
    #[inline]
    pub fn mother_allele(&self) -> Allele {
        self.mother
    }

    /// True if both alleles are the same.
    #[inline]
    pub fn is_homozygous(&self) -> bool {
        self.father == self.mother
    }

    /// True if the two alleles differ.
    #[inline]
    pub fn is_heterozygous(&self) -> bool {
        !self.is_homozygous()
    }

    /// True if either side carries `allele`.
    #[inline]
    pub fn has_allele(&self, allele: Allele) -> bool {
        self.father == allele || self.mother == allele
    }

    /// Inject a mutation into exactly one of the two inherited copies.
    ///
    /// A fair coin flip picks which side is replaced with `mutant`; the other
    /// side keeps whatever it already was, so a freshly mutated population
    /// matches a single-event mutation model rather than a pre-existing
    /// trait.
    ///
    /// # Errors
    /// Fails if `mutant` does not belong to this pair's gene.
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        mutant: Allele,
        rng: &mut R,
    ) -> Result<(), GenePairError> {
        if mutant.gene() != self.gene {
            return Err(GenePairError::ForeignAllele {
                gene: self.gene,
                allele: mutant,
            });
        }
        if rng.random::<bool>() {
            self.father = mutant;
        } else {
            self.mother = mutant;
        }
        Ok(())
    }

    /// The allele this pair expresses.
    ///
    /// Homozygous pairs express their single allele regardless of dominance.
    /// Heterozygous pairs express the gene's current dominant allele.
    ///
    /// # Errors
    /// `DominanceUndetermined` if the pair is heterozygous and no dominance
    /// relationship exists. Heterozygosity can only arise after a mutation
    /// has established dominance, so hitting this is a programming error,
    /// not a user-facing condition. `GeneMismatch` if `gene` is not the gene
    /// this pair references.
    pub fn visible_allele(&self, gene: &Gene) -> Result<Allele, GenePairError> {
        if gene.id() != self.gene {
            return Err(GenePairError::GeneMismatch {
                expected: self.gene,
                found: gene.id(),
            });
        }
        if self.is_homozygous() {
            return Ok(self.father);
        }
        gene.dominant_allele()
            .ok_or(GenePairError::DominanceUndetermined { gene: self.gene })
    }

    /// Two-character genotype code, father then mother (e.g. `"Ff"`).
    ///
    /// Uses the gene's dominant (uppercase) and recessive (lowercase)
    /// letters. Returns an empty string while no dominance relationship
    /// exists.
    pub fn abbreviation(&self, gene: &Gene) -> String {
        match (gene.letter_for(self.father), gene.letter_for(self.mother)) {
            (Some(f), Some(m)) => {
                let mut code = String::with_capacity(2);
                code.push(f);
                code.push(m);
                code
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn fur_pair(father: Allele, mother: Allele) -> GenePair {
        GenePair::new(&Gene::fur(), father, mother).unwrap()
    }

    #[test]
    fn test_pair_new() {
        let gene = Gene::fur();
        let pair = GenePair::new(&gene, gene.normal_allele(), gene.mutant_allele()).unwrap();
        assert_eq!(pair.gene(), GeneId::Fur);
        assert_eq!(pair.father_allele(), gene.normal_allele());
        assert_eq!(pair.mother_allele(), gene.mutant_allele());
    }

    #[test]
    fn test_pair_new_foreign_allele() {
        let gene = Gene::fur();
        let foreign = Allele::mutant(GeneId::Ears);

        let err = GenePair::new(&gene, foreign, gene.normal_allele()).unwrap_err();
        assert_eq!(
            err,
            GenePairError::ForeignAllele {
                gene: GeneId::Fur,
                allele: foreign,
            }
        );

        let err = GenePair::new(&gene, gene.normal_allele(), foreign).unwrap_err();
        assert!(matches!(err, GenePairError::ForeignAllele { .. }));
    }

    #[test]
    fn test_pair_zygosity() {
        let gene = Gene::fur();
        let homo = fur_pair(gene.normal_allele(), gene.normal_allele());
        let hetero = fur_pair(gene.normal_allele(), gene.mutant_allele());

        assert!(homo.is_homozygous());
        assert!(!homo.is_heterozygous());
        assert!(hetero.is_heterozygous());
        assert!(!hetero.is_homozygous());
    }

    #[test]
    fn test_pair_has_allele() {
        let gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());

        assert!(pair.has_allele(gene.normal_allele()));
        assert!(pair.has_allele(gene.mutant_allele()));

        let homo = fur_pair(gene.normal_allele(), gene.normal_allele());
        assert!(homo.has_allele(gene.normal_allele()));
        assert!(!homo.has_allele(gene.mutant_allele()));
    }

    #[test]
    fn test_visible_allele_homozygous_ignores_dominance() {
        let mut gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.normal_allele());

        // No dominance: homozygous pair still expresses its allele
        assert_eq!(pair.visible_allele(&gene).unwrap(), gene.normal_allele());

        // Dominance set to the *other* allele: the answer does not change
        gene.set_dominant(gene.mutant_allele()).unwrap();
        assert_eq!(pair.visible_allele(&gene).unwrap(), gene.normal_allele());
    }

    #[test]
    fn test_visible_allele_heterozygous() {
        let mut gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());

        gene.set_dominant(gene.mutant_allele()).unwrap();
        assert_eq!(pair.visible_allele(&gene).unwrap(), gene.mutant_allele());
    }

    #[test]
    fn test_visible_allele_tracks_dominance_flips() {
        let mut gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());

        gene.set_dominant(gene.mutant_allele()).unwrap();
        assert_eq!(pair.visible_allele(&gene).unwrap(), gene.mutant_allele());

        // Shared-state property: flipping dominance changes the expressed
        // allele of the same unmodified pair
        gene.reset();
        gene.set_dominant(gene.normal_allele()).unwrap();
        assert_eq!(pair.visible_allele(&gene).unwrap(), gene.normal_allele());
    }

    #[test]
    fn test_visible_allele_undetermined() {
        let gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());

        let err = pair.visible_allele(&gene).unwrap_err();
        assert_eq!(
            err,
            GenePairError::DominanceUndetermined { gene: GeneId::Fur }
        );
    }

    #[test]
    fn test_visible_allele_gene_mismatch() {
        let gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.normal_allele());

        let err = pair.visible_allele(&Gene::ears()).unwrap_err();
        assert_eq!(
            err,
            GenePairError::GeneMismatch {
                expected: GeneId::Fur,
                found: GeneId::Ears,
            }
        );
    }

    #[test]
    fn test_mutate_replaces_exactly_one_side() {
        let gene = Gene::fur();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        for _ in 0..50 {
            let mut pair = fur_pair(gene.normal_allele(), gene.normal_allele());
            pair.mutate(gene.mutant_allele(), &mut rng).unwrap();

            let sides = [pair.father_allele(), pair.mother_allele()];
            let mutants = sides.iter().filter(|a| a.is_mutant()).count();
            assert_eq!(mutants, 1);
        }
    }

    #[test]
    fn test_mutate_hits_both_sides_eventually() {
        let gene = Gene::fur();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let mut father_hits = 0;
        let mut mother_hits = 0;
        for _ in 0..200 {
            let mut pair = fur_pair(gene.normal_allele(), gene.normal_allele());
            pair.mutate(gene.mutant_allele(), &mut rng).unwrap();
            if pair.father_allele().is_mutant() {
                father_hits += 1;
            } else {
                mother_hits += 1;
            }
        }

        // A fair coin should land on each side a reasonable number of times
        assert!(father_hits > 50, "father side hit only {father_hits}/200");
        assert!(mother_hits > 50, "mother side hit only {mother_hits}/200");
    }

    #[test]
    fn test_mutate_foreign_allele() {
        let gene = Gene::fur();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut pair = fur_pair(gene.normal_allele(), gene.normal_allele());

        let err = pair
            .mutate(Allele::mutant(GeneId::Teeth), &mut rng)
            .unwrap_err();
        assert!(matches!(err, GenePairError::ForeignAllele { .. }));

        // Pair untouched on error
        assert!(pair.father_allele().is_normal());
        assert!(pair.mother_allele().is_normal());
    }

    #[test]
    fn test_abbreviation_undetermined() {
        let gene = Gene::fur();
        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());
        assert_eq!(pair.abbreviation(&gene), "");
    }

    #[test]
    fn test_abbreviation_father_then_mother() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();

        let pair = fur_pair(gene.mutant_allele(), gene.normal_allele());
        assert_eq!(pair.abbreviation(&gene), "Ff");

        let pair = fur_pair(gene.normal_allele(), gene.mutant_allele());
        assert_eq!(pair.abbreviation(&gene), "fF");

        let pair = fur_pair(gene.mutant_allele(), gene.mutant_allele());
        assert_eq!(pair.abbreviation(&gene), "FF");

        let pair = fur_pair(gene.normal_allele(), gene.normal_allele());
        assert_eq!(pair.abbreviation(&gene), "ff");
    }

    #[test]
    fn test_abbreviation_normal_dominant() {
        let mut gene = Gene::teeth();
        gene.set_dominant(gene.normal_allele()).unwrap();

        let pair = GenePair::new(&gene, gene.normal_allele(), gene.mutant_allele()).unwrap();
        assert_eq!(pair.abbreviation(&gene), "Tt");
    }
}
