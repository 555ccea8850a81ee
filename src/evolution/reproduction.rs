//! Crossing genotypes to produce offspring.
//!
//! Reproduction builds one Punnett square per gene from the two parents'
//! gene pairs and assembles child genotypes from its cells. Litters index
//! the shuffled cells directly; single crosses pick a uniformly random cell
//! per gene.

use rand::Rng;

use crate::base::{Allele, GeneId};
use crate::errors::SimulationError;
use crate::evolution::PunnettSquare;
use crate::genome::{GenePool, Genotype};

/// Number of offspring in a regular litter.
pub const LITTER_SIZE: usize = 4;

fn squares<R: Rng + ?Sized>(
    father: &Genotype,
    mother: &Genotype,
    rng: &mut R,
) -> Result<[PunnettSquare; 3], SimulationError> {
    let fur = PunnettSquare::new(father.pair(GeneId::Fur), mother.pair(GeneId::Fur), rng)?;
    let ears = PunnettSquare::new(father.pair(GeneId::Ears), mother.pair(GeneId::Ears), rng)?;
    let teeth = PunnettSquare::new(father.pair(GeneId::Teeth), mother.pair(GeneId::Teeth), rng)?;
    Ok([fur, ears, teeth])
}

/// Cross two genotypes into a single child.
///
/// Per gene, a Punnett square of the parents' pairs is built and one cell is
/// picked uniformly at random.
pub fn cross<R: Rng + ?Sized>(
    father: &Genotype,
    mother: &Genotype,
    rng: &mut R,
) -> Result<Genotype, SimulationError> {
    let [fur, ears, teeth] = squares(father, mother, rng)?;
    let child = Genotype::from_pairs(
        *fur.random_cell(rng),
        *ears.random_cell(rng),
        *teeth.random_cell(rng),
    )?;
    Ok(child)
}

/// Produce a litter of four offspring, plus an eager fifth for a
/// recessive-mutant carrier.
///
/// Child *i* takes cell *i* of each gene's square; the construction-time
/// shuffle supplies the randomization. When some gene's mutant allele is
/// recessive and present in either parent, one extra child is appended
/// using [`PunnettSquare::additional_cell`] for that gene (random cells for
/// the others), biasing the litter toward making the rare recessive
/// mutation observable sooner. At most one extra child is added per litter.
pub fn litter<R: Rng + ?Sized>(
    father: &Genotype,
    mother: &Genotype,
    pool: &GenePool,
    rng: &mut R,
) -> Result<Vec<Genotype>, SimulationError> {
    let squares = squares(father, mother, rng)?;

    let mut children = Vec::with_capacity(LITTER_SIZE + 1);
    for i in 0..LITTER_SIZE {
        let child = Genotype::from_pairs(
            *squares[0].cell(i)?,
            *squares[1].cell(i)?,
            *squares[2].cell(i)?,
        )?;
        children.push(child);
    }

    if let Some((id, mutant, dominant)) = recessive_carrier_gene(father, mother, pool) {
        let mut pairs = [
            *squares[0].random_cell(rng),
            *squares[1].random_cell(rng),
            *squares[2].random_cell(rng),
        ];
        let idx = id.to_index() as usize;
        pairs[idx] = *squares[idx].additional_cell(mutant, dominant);

        children.push(Genotype::from_pairs(pairs[0], pairs[1], pairs[2])?);
    }

    Ok(children)
}

/// The first gene (stable order) whose mutant allele is recessive and
/// carried by either parent, along with its mutant and dominant alleles.
fn recessive_carrier_gene(
    father: &Genotype,
    mother: &Genotype,
    pool: &GenePool,
) -> Option<(GeneId, Allele, Allele)> {
    GeneId::ALL.into_iter().find_map(|id| {
        let gene = pool.gene(id);
        let mutant = gene.mutant_allele();
        let dominant = gene.dominant_allele()?;
        if gene.recessive_allele() == Some(mutant)
            && (father.has_allele(mutant) || mother.has_allele(mutant))
        {
            Some((id, mutant, dominant))
        } else {
            None
        }
    })
}
