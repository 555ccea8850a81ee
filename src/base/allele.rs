use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one of the three trait genes.
///
/// `GeneId` is a compact, Copyable identifier used throughout the crate to
/// address genes and to tag alleles with the gene they belong to. The mapping
/// of variants to indices is stable (Fur=0, Ears=1, Teeth=2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum GeneId {
    Fur = 0,
    Ears = 1,
    Teeth = 2,
}

impl GeneId {
    /// All gene identifiers in stable order.
    pub const ALL: [GeneId; 3] = [GeneId::Fur, GeneId::Ears, GeneId::Teeth];

    /// Convert from a u8 index (0-2).
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::Fur),
            1 => Some(Self::Ears),
            2 => Some(Self::Teeth),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-2).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fur => "fur",
            Self::Ears => "ears",
            Self::Teeth => "teeth",
        };
        write!(f, "{name}")
    }
}

/// Whether an allele is the wild-type or the mutated form of its gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlleleVariant {
    Normal,
    Mutant,
}

/// An immutable allele value.
///
/// Exactly six distinct alleles exist: the normal and mutant form of each of
/// the three genes. `Allele` is a small `Copy` value and comparison is plain
/// value equality, so two references to "the mutant fur allele" are always
/// equal. There is no other way to construct an allele than through
/// [`Allele::normal`] and [`Allele::mutant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allele {
    gene: GeneId,
    variant: AlleleVariant,
}

impl Allele {
    /// The normal (wild-type) allele of `gene`.
    #[inline(always)]
    pub const fn normal(gene: GeneId) -> Self {
        Self {
            gene,
            variant: AlleleVariant::Normal,
        }
    }

    /// The mutant allele of `gene`.
    #[inline(always)]
    pub const fn mutant(gene: GeneId) -> Self {
        Self {
            gene,
            variant: AlleleVariant::Mutant,
        }
    }

    /// The gene this allele belongs to.
    #[inline(always)]
    pub const fn gene(self) -> GeneId {
        self.gene
    }

    /// The variant (normal or mutant) of this allele.
    #[inline(always)]
    pub const fn variant(self) -> AlleleVariant {
        self.variant
    }

    /// True for the wild-type form.
    #[inline(always)]
    pub const fn is_normal(self) -> bool {
        matches!(self.variant, AlleleVariant::Normal)
    }

    /// True for the mutated form.
    #[inline(always)]
    pub const fn is_mutant(self) -> bool {
        matches!(self.variant, AlleleVariant::Mutant)
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self.variant {
            AlleleVariant::Normal => "normal",
            AlleleVariant::Mutant => "mutant",
        };
        write!(f, "{} ({variant})", self.gene)
    }
}
