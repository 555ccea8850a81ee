//! Evolution operators: Punnett-square crossing and reproduction.
//!
//! This module implements the inheritance machinery:
//! - **PunnettSquare**: the four shuffled offspring combinations of one cross
//! - **Reproduction**: single crosses and litters assembled from the cells

pub mod punnett;
pub mod reproduction;

pub use punnett::PunnettSquare;
pub use reproduction::{cross, litter, LITTER_SIZE};
