//! Simulation orchestration: configuration, population seeding, and the
//! generational engine.

pub mod engine;
pub mod parameters;
pub mod population;
pub mod spec;

pub use engine::{PhenotypeCounts, Simulation};
pub use parameters::{SimulationConfig, DEFAULT_MAX_POPULATION};
pub use population::{Individual, Population};
pub use spec::{
    apply_mutation_selector, parse_population_breakdown, parse_population_spec, ParentAlleles,
    SeedRecord,
};
