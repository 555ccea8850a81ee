use crate::base::GeneId;
use crate::genome::Gene;

/// Registry owning the one `Gene` instance per trait.
///
/// The pool is created once for a simulation run and never replaced. The
/// genes inside are shared mutable state: once a gene's dominance is set,
/// every gene pair and genotype resolving against this pool is affected,
/// because visible alleles read the gene's current dominance at call time.
/// The pool is passed by reference to every consumer that needs to resolve
/// phenotypes or parse specs, which keeps the sharing visible and lets
/// independent simulation instances coexist.
#[derive(Debug, Clone)]
pub struct GenePool {
    fur: Gene,
    ears: Gene,
    teeth: Gene,
}

impl GenePool {
    /// Create a pool with all three genes in the undetermined state.
    pub fn new() -> Self {
        Self {
            fur: Gene::fur(),
            ears: Gene::ears(),
            teeth: Gene::teeth(),
        }
    }

    /// Borrow the gene for `id` (read-only).
    #[inline]
    pub fn gene(&self, id: GeneId) -> &Gene {
        match id {
            GeneId::Fur => &self.fur,
            GeneId::Ears => &self.ears,
            GeneId::Teeth => &self.teeth,
        }
    }

    /// Borrow the gene for `id` mutably (dominance updates).
    #[inline]
    pub fn gene_mut(&mut self, id: GeneId) -> &mut Gene {
        match id {
            GeneId::Fur => &mut self.fur,
            GeneId::Ears => &mut self.ears,
            GeneId::Teeth => &mut self.teeth,
        }
    }

    /// Iterate over the three genes in stable order.
    pub fn genes(&self) -> impl Iterator<Item = &Gene> {
        [&self.fur, &self.ears, &self.teeth].into_iter()
    }

    /// Find a gene by its abbreviation letter, case-insensitively.
    pub fn find_by_letter(&self, letter: char) -> Option<GeneId> {
        let upper = letter.to_ascii_uppercase();
        self.genes()
            .find(|g| g.abbreviation() == upper)
            .map(|g| g.id())
    }

    /// Genes with a determined dominance state, in stable order.
    pub fn mutated_genes(&self) -> Vec<GeneId> {
        self.genes()
            .filter(|g| g.is_determined())
            .map(|g| g.id())
            .collect()
    }
}

impl Default for GenePool {
    fn default() -> Self {
        Self::new()
    }
}
