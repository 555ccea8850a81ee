use crate::base::{Allele, GeneId};
use crate::errors::GeneError;

/// One trait gene and its population-wide dominance state.
///
/// A `Gene` owns the normal/mutant allele pair for one trait together with
/// display metadata (name, trait labels, abbreviation letter) and the mutable
/// dominance relationship between the two alleles. Dominance starts
/// undetermined (`None`): no mutation has occurred yet, so "dominant vs.
/// recessive" is undefined. It is set exactly once per mutation event and may
/// only be reassigned after an explicit [`reset`](Gene::reset).
///
/// There is a single `Gene` type for all three traits; the per-trait
/// constructors carry the trait-specific data. Traits differ only in data,
/// never in behavior.
#[derive(Debug, Clone)]
pub struct Gene {
    /// Which trait this gene controls
    id: GeneId,
    /// Display name of the gene
    name: &'static str,
    /// Label of the normal trait (e.g. "white fur")
    normal_label: &'static str,
    /// Label of the mutant trait (e.g. "brown fur")
    mutant_label: &'static str,
    /// Uppercase abbreviation letter used in genotype codes
    abbreviation: char,
    /// Current dominant allele; `None` while no mutation has occurred
    dominant: Option<Allele>,
    /// A mutation has been scheduled but not yet applied to a generation
    mutation_pending: bool,
}

impl Gene {
    fn new(
        id: GeneId,
        name: &'static str,
        normal_label: &'static str,
        mutant_label: &'static str,
        abbreviation: char,
    ) -> Self {
        Self {
            id,
            name,
            normal_label,
            mutant_label,
            abbreviation,
            dominant: None,
            mutation_pending: false,
        }
    }

    /// The fur gene (white vs. brown fur), abbreviated `F`.
    pub fn fur() -> Self {
        Self::new(GeneId::Fur, "fur", "white fur", "brown fur", 'F')
    }

    /// The ears gene (straight vs. floppy ears), abbreviated `E`.
    pub fn ears() -> Self {
        Self::new(GeneId::Ears, "ears", "straight ears", "floppy ears", 'E')
    }

    /// The teeth gene (short vs. long teeth), abbreviated `T`.
    pub fn teeth() -> Self {
        Self::new(GeneId::Teeth, "teeth", "short teeth", "long teeth", 'T')
    }

    /// This gene's identifier.
    #[inline]
    pub fn id(&self) -> GeneId {
        self.id
    }

    /// Display name of the gene.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The normal (wild-type) allele of this gene.
    #[inline]
    pub fn normal_allele(&self) -> Allele {
        Allele::normal(self.id)
    }

    /// The mutant allele of this gene.
    #[inline]
    pub fn mutant_allele(&self) -> Allele {
        Allele::mutant(self.id)
    }

    /// Human-readable label for one of this gene's alleles.
    pub fn label_for(&self, allele: Allele) -> Option<&'static str> {
        if !self.contains(allele) {
            return None;
        }
        Some(if allele.is_normal() {
            self.normal_label
        } else {
            self.mutant_label
        })
    }

    /// Uppercase abbreviation letter of this gene.
    #[inline]
    pub fn abbreviation(&self) -> char {
        self.abbreviation
    }

    /// True if `allele` is one of this gene's two alleles.
    #[inline]
    pub fn contains(&self, allele: Allele) -> bool {
        allele.gene() == self.id
    }

    /// The current dominant allele, or `None` while dominance is undefined.
    #[inline]
    pub fn dominant_allele(&self) -> Option<Allele> {
        self.dominant
    }

    /// The current recessive allele, derived from the dominant one.
    ///
    /// `None` while dominance is undefined; otherwise the allele of the pair
    /// that is not dominant.
    pub fn recessive_allele(&self) -> Option<Allele> {
        self.dominant.map(|dom| {
            if dom.is_mutant() {
                self.normal_allele()
            } else {
                self.mutant_allele()
            }
        })
    }

    /// True once a dominance relationship has been established.
    #[inline]
    pub fn is_determined(&self) -> bool {
        self.dominant.is_some()
    }

    /// Assign the dominant allele for this gene.
    ///
    /// # Errors
    /// Fails if `allele` does not belong to this gene, or if dominance is
    /// already determined. A gene mutates exactly once; reassignment requires
    /// an explicit [`reset`](Gene::reset) first.
    pub fn set_dominant(&mut self, allele: Allele) -> Result<(), GeneError> {
        if !self.contains(allele) {
            return Err(GeneError::ForeignAllele {
                gene: self.id,
                allele,
            });
        }
        if self.dominant.is_some() {
            return Err(GeneError::AlreadyDetermined { gene: self.id });
        }
        self.dominant = Some(allele);
        Ok(())
    }

    /// Clear the dominance relationship and any pending mutation.
    ///
    /// Used to cancel a scheduled-but-unapplied mutation. Callers must only
    /// reset before the mutation has propagated into the population.
    pub fn reset(&mut self) {
        self.dominant = None;
        self.mutation_pending = false;
    }

    /// True if a mutation is scheduled for the next generation.
    #[inline]
    pub fn mutation_pending(&self) -> bool {
        self.mutation_pending
    }

    /// Mark a mutation as scheduled for the next generation.
    #[inline]
    pub fn set_mutation_pending(&mut self, pending: bool) {
        self.mutation_pending = pending;
    }

    /// The genotype letter for one of this gene's alleles.
    ///
    /// Uppercase for the dominant allele, lowercase for the recessive one.
    /// `None` while dominance is undetermined or for a foreign allele.
    pub fn letter_for(&self, allele: Allele) -> Option<char> {
        if !self.contains(allele) {
            return None;
        }
        let dominant = self.dominant?;
        if allele == dominant {
            Some(self.abbreviation.to_ascii_uppercase())
        } else {
            Some(self.abbreviation.to_ascii_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gene_fur() {
        let gene = Gene::fur();
        assert_eq!(gene.id(), GeneId::Fur);
        assert_eq!(gene.name(), "fur");
        assert_eq!(gene.abbreviation(), 'F');
        assert_eq!(gene.dominant_allele(), None);
        assert!(!gene.mutation_pending());
    }

    #[test]
    fn test_gene_ears_teeth() {
        assert_eq!(Gene::ears().id(), GeneId::Ears);
        assert_eq!(Gene::ears().abbreviation(), 'E');
        assert_eq!(Gene::teeth().id(), GeneId::Teeth);
        assert_eq!(Gene::teeth().abbreviation(), 'T');
    }

    #[test]
    fn test_gene_alleles() {
        let gene = Gene::fur();
        assert!(gene.normal_allele().is_normal());
        assert!(gene.mutant_allele().is_mutant());
        assert_eq!(gene.normal_allele().gene(), GeneId::Fur);
        assert_eq!(gene.mutant_allele().gene(), GeneId::Fur);
    }

    #[test]
    fn test_gene_contains() {
        let gene = Gene::fur();
        assert!(gene.contains(Allele::normal(GeneId::Fur)));
        assert!(gene.contains(Allele::mutant(GeneId::Fur)));
        assert!(!gene.contains(Allele::normal(GeneId::Ears)));
        assert!(!gene.contains(Allele::mutant(GeneId::Teeth)));
    }

    #[test]
    fn test_gene_labels() {
        let gene = Gene::fur();
        assert_eq!(gene.label_for(gene.normal_allele()), Some("white fur"));
        assert_eq!(gene.label_for(gene.mutant_allele()), Some("brown fur"));
        assert_eq!(gene.label_for(Allele::normal(GeneId::Ears)), None);
    }

    #[test]
    fn test_set_dominant_mutant() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();

        assert_eq!(gene.dominant_allele(), Some(gene.mutant_allele()));
        assert_eq!(gene.recessive_allele(), Some(gene.normal_allele()));
        assert!(gene.is_determined());
    }

    #[test]
    fn test_set_dominant_normal() {
        let mut gene = Gene::ears();
        gene.set_dominant(gene.normal_allele()).unwrap();

        assert_eq!(gene.dominant_allele(), Some(gene.normal_allele()));
        assert_eq!(gene.recessive_allele(), Some(gene.mutant_allele()));
    }

    #[test]
    fn test_set_dominant_foreign_allele() {
        let mut gene = Gene::fur();
        let err = gene.set_dominant(Allele::mutant(GeneId::Ears)).unwrap_err();
        assert_eq!(
            err,
            GeneError::ForeignAllele {
                gene: GeneId::Fur,
                allele: Allele::mutant(GeneId::Ears),
            }
        );
        assert!(!gene.is_determined());
    }

    #[test]
    fn test_set_dominant_twice() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();

        let err = gene.set_dominant(gene.normal_allele()).unwrap_err();
        assert_eq!(err, GeneError::AlreadyDetermined { gene: GeneId::Fur });

        // First assignment untouched
        assert_eq!(gene.dominant_allele(), Some(gene.mutant_allele()));
    }

    #[test]
    fn test_recessive_undetermined() {
        let gene = Gene::teeth();
        assert_eq!(gene.recessive_allele(), None);
    }

    #[test]
    fn test_reset() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();
        gene.set_mutation_pending(true);

        gene.reset();

        assert_eq!(gene.dominant_allele(), None);
        assert_eq!(gene.recessive_allele(), None);
        assert!(!gene.mutation_pending());
    }

    #[test]
    fn test_reset_then_reassign() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();
        gene.reset();

        // After a reset, the dominance may be assigned again
        gene.set_dominant(gene.normal_allele()).unwrap();
        assert_eq!(gene.dominant_allele(), Some(gene.normal_allele()));
    }

    #[test]
    fn test_mutation_pending() {
        let mut gene = Gene::ears();
        assert!(!gene.mutation_pending());
        gene.set_mutation_pending(true);
        assert!(gene.mutation_pending());
        gene.set_mutation_pending(false);
        assert!(!gene.mutation_pending());
    }

    #[test]
    fn test_letter_for_undetermined() {
        let gene = Gene::fur();
        assert_eq!(gene.letter_for(gene.normal_allele()), None);
        assert_eq!(gene.letter_for(gene.mutant_allele()), None);
    }

    #[test]
    fn test_letter_for_mutant_dominant() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();

        assert_eq!(gene.letter_for(gene.mutant_allele()), Some('F'));
        assert_eq!(gene.letter_for(gene.normal_allele()), Some('f'));
    }

    #[test]
    fn test_letter_for_mutant_recessive() {
        let mut gene = Gene::teeth();
        gene.set_dominant(gene.normal_allele()).unwrap();

        assert_eq!(gene.letter_for(gene.normal_allele()), Some('T'));
        assert_eq!(gene.letter_for(gene.mutant_allele()), Some('t'));
    }

    #[test]
    fn test_letter_for_foreign() {
        let mut gene = Gene::fur();
        gene.set_dominant(gene.mutant_allele()).unwrap();
        assert_eq!(gene.letter_for(Allele::mutant(GeneId::Ears)), None);
    }
}
