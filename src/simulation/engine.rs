//! Simulation engine for generational inheritance.
//!
//! The engine owns the gene pool, the population, and a seeded RNG, and
//! advances one generation at a time: shuffle, pair, litter, apply scheduled
//! mutations, truncate at the population cap.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::base::GeneId;
use crate::errors::SimulationError;
use crate::evolution::litter;
use crate::genome::{GenePool, Genotype};
use crate::simulation::{
    parse_population_spec, Individual, Population, SeedRecord, SimulationConfig,
};

/// Per-generation phenotype tally for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhenotypeCounts {
    pub total: usize,
    pub mutant_fur: usize,
    pub mutant_ears: usize,
    pub mutant_teeth: usize,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Shared dominance state, read at phenotype-derivation time
    pool: GenePool,
    /// Current population
    population: Population,
    /// Simulation configuration
    config: SimulationConfig,
    /// Random number generator (Xoshiro256++ for reproducible runs)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from a textual population specification.
    ///
    /// The mutation selector is applied to a fresh gene pool, the breakdown
    /// expressions are parsed against it, and one individual is created per
    /// record count. Spec parsing is all-or-nothing: any failure aborts
    /// startup.
    pub fn from_spec(
        selector: &str,
        expressions: &[String],
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let mut pool = GenePool::new();
        let records =
            parse_population_spec(selector, expressions, &mut pool, config.max_population)?;
        Self::from_records(pool, &records, config)
    }

    /// Create a simulation from already-parsed seed records.
    pub fn from_records(
        pool: GenePool,
        records: &[SeedRecord],
        config: SimulationConfig,
    ) -> Result<Self, SimulationError> {
        let mut rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let mut individuals = Vec::new();
        for record in records {
            let options = record.to_options();
            for _ in 0..record.count {
                let id = format!("ind_g0_{}", individuals.len());
                let genotype = Genotype::new(&pool, &options, &mut rng)?;
                individuals.push(Individual::new(id, genotype));
            }
        }

        Ok(Self {
            pool,
            population: Population::new(individuals),
            config,
            rng,
        })
    }

    /// The gene pool.
    #[inline]
    pub fn pool(&self) -> &GenePool {
        &self.pool
    }

    /// The current population.
    #[inline]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The current generation number.
    #[inline]
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// The simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Schedule a mutation for `gene`, establishing its dominance if it has
    /// none yet.
    ///
    /// The mutant allele is introduced into one newborn of the next litter
    /// round; `mutant_dominant` decides which allele the pool treats as
    /// dominant from now on. Dominance already established for the gene is
    /// left untouched.
    pub fn schedule_mutation(
        &mut self,
        id: GeneId,
        mutant_dominant: bool,
    ) -> Result<(), SimulationError> {
        let gene = self.pool.gene_mut(id);
        if !gene.is_determined() {
            let dominant = if mutant_dominant {
                gene.mutant_allele()
            } else {
                gene.normal_allele()
            };
            gene.set_dominant(dominant)?;
        }
        gene.set_mutation_pending(true);
        Ok(())
    }

    /// Advance the simulation by one generation.
    ///
    /// The current individuals are shuffled and paired off (a leftover
    /// individual does not mate this round); each pair produces a litter.
    /// Scheduled mutations are then applied, each to a different newborn.
    /// Parents and newborns together form the next generation, truncated at
    /// the configured maximum population.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let mut order: Vec<usize> = (0..self.population.size()).collect();
        order.shuffle(&mut self.rng);

        let mut newborns: Vec<Genotype> = Vec::new();
        for pair in order.chunks_exact(2) {
            // chunks_exact guarantees both indices exist
            let (father, mother) = match (self.population.get(pair[0]), self.population.get(pair[1]))
            {
                (Some(f), Some(m)) => (f, m),
                _ => continue,
            };
            newborns.extend(litter(
                father.genotype(),
                mother.genotype(),
                &self.pool,
                &mut self.rng,
            )?);
        }

        self.apply_pending_mutations(&mut newborns)?;

        let next_generation = self.population.generation() + 1;
        let mut individuals: Vec<Individual> = self.population.individuals().to_vec();
        individuals.extend(newborns.into_iter().enumerate().map(|(i, genotype)| {
            Individual::new(format!("ind_g{next_generation}_{i}"), genotype)
        }));
        individuals.truncate(self.config.max_population);

        self.population.advance(individuals);
        Ok(())
    }

    /// Apply each pending gene mutation to a distinct newborn and clear its
    /// flag. A flag stays set when the round produced too few newborns to
    /// host its mutation.
    fn apply_pending_mutations(
        &mut self,
        newborns: &mut [Genotype],
    ) -> Result<(), SimulationError> {
        let mut next = 0usize;
        for id in GeneId::ALL {
            if !self.pool.gene(id).mutation_pending() {
                continue;
            }
            let Some(genotype) = newborns.get_mut(next) else {
                break;
            };
            genotype.mutate(self.pool.gene(id), &mut self.rng)?;
            self.pool.gene_mut(id).set_mutation_pending(false);
            next += 1;
        }
        Ok(())
    }

    /// Run for the configured number of generations.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        for _ in 0..self.config.generations {
            self.step()?;
        }
        Ok(())
    }

    /// Tally observable traits across the current population.
    pub fn phenotype_counts(&self) -> Result<PhenotypeCounts, SimulationError> {
        let mut counts = PhenotypeCounts::default();
        for individual in self.population.individuals() {
            let phenotype = individual.phenotype(&self.pool)?;
            counts.total += 1;
            if phenotype.has_mutant_fur() {
                counts.mutant_fur += 1;
            }
            if phenotype.has_mutant_ears() {
                counts.mutant_ears += 1;
            }
            if phenotype.has_mutant_teeth() {
                counts.mutant_teeth += 1;
            }
        }
        Ok(counts)
    }
}
