//! Parsing of textual population specifications.
//!
//! A population spec has two parts: a mutation-selector string (e.g. `"FeT"`)
//! that establishes each mutated gene's dominance, and a population breakdown
//! (either a bare count or `"<count><genotype-letters>"` expressions, e.g.
//! `"35FFeEtt"`) that assigns starting alleles per individual. Parsing is
//! all-or-nothing: any failure aborts population seeding entirely and is
//! surfaced as a startup error.

use serde::{Deserialize, Serialize};

use crate::base::{Allele, GeneId};
use crate::errors::SpecError;
use crate::genome::{GenePool, GenotypeOptions};

/// A father/mother allele assignment for one gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentAlleles {
    pub father: Allele,
    pub mother: Allele,
}

impl ParentAlleles {
    /// Both sides set to the gene's normal allele.
    pub fn normal(gene: GeneId) -> Self {
        Self {
            father: Allele::normal(gene),
            mother: Allele::normal(gene),
        }
    }
}

/// One parsed population record: how many individuals to create and the six
/// alleles each of them starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// Number of individuals sharing this allele assignment
    pub count: usize,
    pub fur: ParentAlleles,
    pub ears: ParentAlleles,
    pub teeth: ParentAlleles,
}

impl SeedRecord {
    /// A record of `count` individuals with all six alleles normal.
    pub fn uniform_normal(count: usize) -> Self {
        Self {
            count,
            fur: ParentAlleles::normal(GeneId::Fur),
            ears: ParentAlleles::normal(GeneId::Ears),
            teeth: ParentAlleles::normal(GeneId::Teeth),
        }
    }

    /// The allele assignment for `gene`.
    pub fn alleles(&self, gene: GeneId) -> ParentAlleles {
        match gene {
            GeneId::Fur => self.fur,
            GeneId::Ears => self.ears,
            GeneId::Teeth => self.teeth,
        }
    }

    fn set_alleles(&mut self, gene: GeneId, alleles: ParentAlleles) {
        match gene {
            GeneId::Fur => self.fur = alleles,
            GeneId::Ears => self.ears = alleles,
            GeneId::Teeth => self.teeth = alleles,
        }
    }

    /// Genotype construction options for one individual of this record.
    pub fn to_options(&self) -> GenotypeOptions {
        GenotypeOptions {
            father_fur: self.fur.father,
            mother_fur: self.fur.mother,
            father_ears: self.ears.father,
            mother_ears: self.ears.mother,
            father_teeth: self.teeth.father,
            mother_teeth: self.teeth.mother,
            ..Default::default()
        }
    }
}

/// Apply a mutation-selector string to the pool's genes.
///
/// Each character selects one gene by its abbreviation letter: uppercase
/// makes the mutant allele dominant, lowercase makes it recessive (the
/// normal allele becomes dominant). An empty string selects no mutations.
///
/// # Errors
/// `UnknownSelector` for a character matching no gene, and
/// `ConflictingSelector` if both cases of one gene's letter appear.
pub fn apply_mutation_selector(selector: &str, pool: &mut GenePool) -> Result<(), SpecError> {
    for c in selector.chars() {
        let id = pool
            .find_by_letter(c)
            .ok_or(SpecError::UnknownSelector(c))?;
        let gene = pool.gene_mut(id);
        let dominant = if c.is_uppercase() {
            gene.mutant_allele()
        } else {
            gene.normal_allele()
        };
        gene.set_dominant(dominant)
            .map_err(|_| SpecError::ConflictingSelector { gene: id })?;
    }
    Ok(())
}

/// Parse a list of population breakdown expressions against the pool's
/// current dominance state.
///
/// Each expression is split at the first non-digit into a leading count and
/// a genotype-letter sequence; the letters are validated (length equal to
/// twice the number of mutated genes, no letters for unmutated genes, each
/// mutated gene's letters exactly twice) and translated into father/mother
/// allele assignments. First occurrence per gene goes to the father, second
/// to the mother; an uppercase letter maps to the gene's dominant allele, a
/// lowercase one to its recessive allele. Genes not mentioned default both
/// sides to normal.
///
/// The output preserves input order.
///
/// # Errors
/// Any syntax or validation failure per the rules above, including a running
/// total that meets or exceeds `max_population`.
pub fn parse_population_breakdown(
    expressions: &[String],
    pool: &GenePool,
    max_population: usize,
) -> Result<Vec<SeedRecord>, SpecError> {
    let mutated = pool.mutated_genes();
    let expected_letters = 2 * mutated.len();

    let mut records = Vec::with_capacity(expressions.len());
    let mut total = 0usize;

    for expr in expressions {
        let split = expr
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(expr.len());
        let (count_part, letters) = expr.split_at(split);

        if count_part.is_empty() {
            return Err(SpecError::MissingCount(expr.clone()));
        }
        let count: usize = count_part
            .parse()
            .map_err(|_| SpecError::InvalidCount(expr.clone()))?;
        if count == 0 {
            return Err(SpecError::InvalidCount(expr.clone()));
        }

        // Saturating: an absurdly large count must trip the limit check, not
        // wrap the running total past it
        total = total.saturating_add(count);
        if total >= max_population {
            return Err(SpecError::PopulationLimit {
                total,
                max: max_population,
            });
        }

        let record = translate_letters(count, letters, pool, &mutated, expected_letters)?;
        records.push(record);
    }

    Ok(records)
}

fn translate_letters(
    count: usize,
    letters: &str,
    pool: &GenePool,
    mutated: &[GeneId],
    expected_letters: usize,
) -> Result<SeedRecord, SpecError> {
    // Resolve every letter to its gene and allele first. A letter is only
    // meaningful for a gene whose dominance has been established.
    let mut resolved: Vec<(GeneId, Allele)> = Vec::with_capacity(letters.len());
    for c in letters.chars() {
        let id = pool
            .find_by_letter(c)
            .ok_or(SpecError::UnknownGenotypeLetter(c))?;
        let gene = pool.gene(id);
        if !gene.is_determined() {
            return Err(SpecError::UnexpectedLetter { letter: c, gene: id });
        }
        // is_determined implies both dominant and recessive exist
        let allele = if c.is_uppercase() {
            gene.dominant_allele()
        } else {
            gene.recessive_allele()
        }
        .ok_or(SpecError::UnexpectedLetter { letter: c, gene: id })?;
        resolved.push((id, allele));
    }

    if resolved.len() != expected_letters {
        return Err(SpecError::WrongLetterCount {
            expected: expected_letters,
            found: resolved.len(),
        });
    }

    // Two alleles per individual: each mutated gene's letters (either case)
    // must occur exactly twice.
    for &id in mutated {
        let found = resolved.iter().filter(|(g, _)| *g == id).count();
        if found != 2 {
            return Err(SpecError::LetterCount { gene: id, found });
        }
    }

    // A gene's two occurrences form one adjacent pair, first occurrence
    // father, second mother. "FEfe" has two fur and two ears letters but
    // interleaves them, so it is rejected here.
    let mut record = SeedRecord::uniform_normal(count);
    for chunk in resolved.chunks_exact(2) {
        let (father_gene, father) = chunk[0];
        let (mother_gene, mother) = chunk[1];
        if father_gene != mother_gene {
            return Err(SpecError::UnpairedLetters { gene: father_gene });
        }
        record.set_alleles(father_gene, ParentAlleles { father, mother });
    }

    Ok(record)
}

/// Parse a complete population specification.
///
/// Applies the mutation selector to the pool, then parses the breakdown
/// expressions against the resulting dominance state. Parsing is
/// all-or-nothing: the dominance changes are staged on a copy and only
/// committed to `pool` when the whole parse succeeds, so a failed call
/// leaves the pool untouched.
pub fn parse_population_spec(
    selector: &str,
    expressions: &[String],
    pool: &mut GenePool,
    max_population: usize,
) -> Result<Vec<SeedRecord>, SpecError> {
    let mut staged = pool.clone();
    apply_mutation_selector(selector, &mut staged)?;
    let records = parse_population_breakdown(expressions, &staged, max_population)?;
    *pool = staged;
    Ok(records)
}
