//! Punnett squares for crossing two gene pairs.
//!
//! A Punnett square enumerates the four allele combinations two parents can
//! pass on for one gene. The cells are stored in shuffled order so that
//! sampling by index stays unbiased, which implements the Law of Independent
//! Assortment at the pairing level.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::base::Allele;
use crate::errors::PunnettError;
use crate::genome::GenePair;

/// The four possible offspring allele combinations of one cross.
///
/// Cell layout before shuffling is (father's father × mother's father,
/// father's father × mother's mother, father's mother × mother's father,
/// father's mother × mother's mother), where each child cell keeps the
/// father-derived allele on the paternal side.
#[derive(Debug, Clone)]
pub struct PunnettSquare {
    cells: [GenePair; 4],
}

impl PunnettSquare {
    /// Number of cells in a square.
    pub const CELLS: usize = 4;

    /// Cross two parent pairs for the same gene.
    ///
    /// The four resulting combinations are shuffled with a fair shuffle so
    /// repeated indexed sampling does not bias toward a particular cell.
    ///
    /// # Errors
    /// Fails if the two pairs reference different genes.
    pub fn new<R: Rng + ?Sized>(
        father: &GenePair,
        mother: &GenePair,
        rng: &mut R,
    ) -> Result<Self, PunnettError> {
        if father.gene() != mother.gene() {
            return Err(PunnettError::GeneMismatch {
                father: father.gene(),
                mother: mother.gene(),
            });
        }

        let gene = father.gene();
        let (ff, fm) = (father.father_allele(), father.mother_allele());
        let (mf, mm) = (mother.father_allele(), mother.mother_allele());

        let mut cells = [
            GenePair::from_validated(gene, ff, mf),
            GenePair::from_validated(gene, ff, mm),
            GenePair::from_validated(gene, fm, mf),
            GenePair::from_validated(gene, fm, mm),
        ];
        cells.shuffle(rng);

        Ok(Self { cells })
    }

    /// All four cells in shuffled order.
    #[inline]
    pub fn cells(&self) -> &[GenePair; 4] {
        &self.cells
    }

    /// Indexed access into the shuffled cells.
    ///
    /// # Errors
    /// Fails if `index` is outside `[0, 4)`.
    pub fn cell(&self, index: usize) -> Result<&GenePair, PunnettError> {
        self.cells
            .get(index)
            .ok_or(PunnettError::OutOfBounds { index })
    }

    /// Uniform pick among the four cells.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> &GenePair {
        &self.cells[rng.random_range(0..Self::CELLS)]
    }

    /// Tie-break selection for an eager extra offspring.
    ///
    /// When a rule requires a fifth (bonus) offspring for a recessive-mutant
    /// carrier, the cell is chosen by priority: (1) a cell homozygous for
    /// `mutant`, (2) the first cell in shuffled order containing `dominant`
    /// on either side, (3) the first cell outright (the shuffle already makes
    /// that a uniform pick). This biases the extra birth toward making a
    /// rare recessive mutation observable sooner.
    pub fn additional_cell(&self, mutant: Allele, dominant: Allele) -> &GenePair {
        if let Some(cell) = self
            .cells
            .iter()
            .find(|c| c.father_allele() == mutant && c.mother_allele() == mutant)
        {
            return cell;
        }
        if let Some(cell) = self.cells.iter().find(|c| c.has_allele(dominant)) {
            return cell;
        }
        &self.cells[0]
    }
}
