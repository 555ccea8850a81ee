use std::error;
use std::fmt;

use crate::base::{Allele, GeneId};

/// Errors from operations on a `Gene`'s dominance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneError {
    /// The allele does not belong to this gene
    ForeignAllele { gene: GeneId, allele: Allele },
    /// Dominance has already been determined for this gene
    AlreadyDetermined { gene: GeneId },
}

impl fmt::Display for GeneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignAllele { gene, allele } => {
                write!(f, "Allele {allele} does not belong to the {gene} gene")
            }
            Self::AlreadyDetermined { gene } => {
                write!(
                    f,
                    "Dominance for the {gene} gene is already determined (reset first)"
                )
            }
        }
    }
}

impl error::Error for GeneError {}

/// Errors from constructing or querying a `GenePair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenePairError {
    /// An allele does not belong to the pair's gene
    ForeignAllele { gene: GeneId, allele: Allele },
    /// A heterozygous pair was queried for its visible allele before any
    /// dominance relationship was established
    DominanceUndetermined { gene: GeneId },
    /// The pair was queried against a gene it does not reference
    GeneMismatch { expected: GeneId, found: GeneId },
}

impl fmt::Display for GenePairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForeignAllele { gene, allele } => {
                write!(f, "Allele {allele} does not belong to the {gene} gene")
            }
            Self::DominanceUndetermined { gene } => {
                write!(
                    f,
                    "Visible allele of a heterozygous {gene} pair requires dominance to be set"
                )
            }
            Self::GeneMismatch { expected, found } => {
                write!(f, "Gene pair is for {expected}, not {found}")
            }
        }
    }
}

impl error::Error for GenePairError {}

/// Errors from constructing or indexing a `PunnettSquare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunnettError {
    /// Parent pairs reference different genes
    GeneMismatch { father: GeneId, mother: GeneId },
    /// Cell index outside [0, 4)
    OutOfBounds { index: usize },
}

impl fmt::Display for PunnettError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeneMismatch { father, mother } => {
                write!(
                    f,
                    "Punnett square requires pairs for the same gene ({father} vs {mother})"
                )
            }
            Self::OutOfBounds { index } => {
                write!(f, "Punnett cell index {index} out of bounds (4 cells)")
            }
        }
    }
}

impl error::Error for PunnettError {}

/// Errors from constructing or mutating a `Genotype`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenotypeError {
    /// More than one mutate flag was requested for a single genotype
    ConflictingMutations,
    /// A gene pair was supplied for the wrong slot
    GeneMismatch { expected: GeneId, found: GeneId },
    /// Underlying gene pair failure
    Pair(GenePairError),
}

impl fmt::Display for GenotypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingMutations => {
                write!(
                    f,
                    "A genotype may carry at most one fresh mutation per birth event"
                )
            }
            Self::GeneMismatch { expected, found } => {
                write!(f, "Expected a gene pair for {expected}, found {found}")
            }
            Self::Pair(e) => write!(f, "Gene pair error: {e}"),
        }
    }
}

impl error::Error for GenotypeError {}

impl From<GenePairError> for GenotypeError {
    fn from(e: GenePairError) -> Self {
        Self::Pair(e)
    }
}

/// Errors from parsing a population specification.
///
/// These are configuration failures surfaced at startup; parsing is
/// all-or-nothing and a failure aborts population seeding entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// A mutation-selector character matched no gene abbreviation
    UnknownSelector(char),
    /// Both the dominant and recessive letters of one gene were selected
    ConflictingSelector { gene: GeneId },
    /// A breakdown expression had no leading count
    MissingCount(String),
    /// A breakdown expression's count was not a positive integer
    InvalidCount(String),
    /// The running population total met or exceeded the configured maximum
    PopulationLimit { total: usize, max: usize },
    /// A genotype letter matched no gene abbreviation
    UnknownGenotypeLetter(char),
    /// A genotype letter named a gene that has no mutation
    UnexpectedLetter { letter: char, gene: GeneId },
    /// The genotype letters were not exactly twice the number of mutated genes
    WrongLetterCount { expected: usize, found: usize },
    /// A mutated gene's letters did not appear exactly twice
    LetterCount { gene: GeneId, found: usize },
    /// A gene's two letters were not written together as one pair
    UnpairedLetters { gene: GeneId },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSelector(c) => {
                write!(f, "Unrecognized mutation-selector character '{c}'")
            }
            Self::ConflictingSelector { gene } => {
                write!(
                    f,
                    "The {gene} gene cannot be selected both dominant and recessive"
                )
            }
            Self::MissingCount(expr) => {
                write!(f, "Missing leading count in population expression '{expr}'")
            }
            Self::InvalidCount(expr) => {
                write!(
                    f,
                    "Count in population expression '{expr}' is not a positive integer"
                )
            }
            Self::PopulationLimit { total, max } => {
                write!(
                    f,
                    "Population total {total} meets or exceeds the maximum of {max}"
                )
            }
            Self::UnknownGenotypeLetter(c) => {
                write!(f, "Unrecognized genotype letter '{c}'")
            }
            Self::UnexpectedLetter { letter, gene } => {
                write!(
                    f,
                    "Letter '{letter}' refers to the {gene} gene, which has no mutation"
                )
            }
            Self::WrongLetterCount { expected, found } => {
                write!(
                    f,
                    "Expected {expected} genotype letters (two per mutated gene), found {found}"
                )
            }
            Self::LetterCount { gene, found } => {
                write!(
                    f,
                    "Letters for the {gene} gene must appear exactly twice, found {found}"
                )
            }
            Self::UnpairedLetters { gene } => {
                write!(
                    f,
                    "The two letters for the {gene} gene must be written as one adjacent pair"
                )
            }
        }
    }
}

impl error::Error for SpecError {}

/// Errors from seeding or running a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Invalid configuration value
    InvalidConfig(String),
    /// Gene dominance state failure
    Gene(GeneError),
    /// Population spec parsing failed
    Spec(SpecError),
    /// Genotype construction failed
    Genotype(GenotypeError),
    /// Punnett square failure during reproduction
    Punnett(PunnettError),
    /// Gene pair failure (e.g. phenotype derivation)
    Pair(GenePairError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            Self::Gene(e) => write!(f, "Gene error: {e}"),
            Self::Spec(e) => write!(f, "Population spec error: {e}"),
            Self::Genotype(e) => write!(f, "Genotype error: {e}"),
            Self::Punnett(e) => write!(f, "Punnett square error: {e}"),
            Self::Pair(e) => write!(f, "Gene pair error: {e}"),
        }
    }
}

impl error::Error for SimulationError {}

impl From<GeneError> for SimulationError {
    fn from(e: GeneError) -> Self {
        Self::Gene(e)
    }
}

impl From<SpecError> for SimulationError {
    fn from(e: SpecError) -> Self {
        Self::Spec(e)
    }
}

impl From<GenotypeError> for SimulationError {
    fn from(e: GenotypeError) -> Self {
        Self::Genotype(e)
    }
}

impl From<PunnettError> for SimulationError {
    fn from(e: PunnettError) -> Self {
        Self::Punnett(e)
    }
}

impl From<GenePairError> for SimulationError {
    fn from(e: GenePairError) -> Self {
        Self::Pair(e)
    }
}
