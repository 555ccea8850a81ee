//! Base types for the genetic data model.
//!
//! This module provides the foundational identifiers for genes and alleles
//! used throughout the mendevo library.

mod allele;

pub use allele::{Allele, AlleleVariant, GeneId};
