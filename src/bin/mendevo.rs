//! Mendevo CLI - Command-line interface for Mendelian inheritance simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mendevo::base::GeneId;
use mendevo::genome::GenePool;
use mendevo::simulation::{
    parse_population_spec, Simulation, SimulationConfig, DEFAULT_MAX_POPULATION,
};

/// Mendevo - Mendelian inheritance simulator
#[derive(Parser, Debug)]
#[command(name = "mendevo")]
#[command(author, version, about = "Mendelian inheritance simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe the gene registry
    Genes,

    /// Parse a population specification and print the seed records
    Seed {
        /// Mutation selector, e.g. "FeT" (uppercase: mutant dominant)
        #[arg(short, long, default_value = "")]
        mutations: String,

        /// Breakdown expressions, e.g. "35FFeEtt" or a bare count
        #[arg(required = true)]
        breakdown: Vec<String>,

        /// Maximum population size
        #[arg(long, default_value_t = DEFAULT_MAX_POPULATION)]
        max_population: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Seed a population and run the simulation
    Run {
        /// Mutation selector, e.g. "FeT" (uppercase: mutant dominant)
        #[arg(short, long, default_value = "")]
        mutations: String,

        /// Breakdown expressions, e.g. "35FFeEtt" or a bare count
        #[arg(required = true)]
        breakdown: Vec<String>,

        /// Maximum population size
        #[arg(long, default_value_t = DEFAULT_MAX_POPULATION)]
        max_population: usize,

        /// Number of generations
        #[arg(short, long, default_value = "10")]
        generations: usize,

        /// Random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,

        /// Output file for json format (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Genes => {
            show_genes();
        }
        Commands::Seed {
            mutations,
            breakdown,
            max_population,
            format,
            output,
        } => {
            seed_population(&mutations, &breakdown, max_population, &format, output.as_ref())?;
        }
        Commands::Run {
            mutations,
            breakdown,
            max_population,
            generations,
            seed,
            format,
            output,
        } => {
            run_simulation(
                &mutations,
                &breakdown,
                max_population,
                generations,
                seed,
                &format,
                output.as_ref(),
            )?;
        }
    }

    Ok(())
}

fn show_genes() {
    let pool = GenePool::new();

    println!("🧬 Mendevo - Gene Registry");
    println!("{}", "=".repeat(50));

    for gene in pool.genes() {
        println!("\n{} (letter '{}')", gene.name(), gene.abbreviation());
        println!(
            "  normal: {}",
            gene.label_for(gene.normal_allele()).unwrap_or("?")
        );
        println!(
            "  mutant: {}",
            gene.label_for(gene.mutant_allele()).unwrap_or("?")
        );
    }

    println!("\n💡 Uppercase selector letter makes the mutant allele dominant");
}

fn seed_population(
    mutations: &str,
    breakdown: &[String],
    max_population: usize,
    format: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut pool = GenePool::new();
    let records = parse_population_spec(mutations, breakdown, &mut pool, max_population)
        .context("Failed to parse population specification")?;

    match format {
        "json" => {
            let content = serde_json::to_string_pretty(&records)?;
            write_or_print(&content, output)?;
        }
        "table" => {
            println!("🧬 Mendevo - Seed Records");
            println!("{}", "=".repeat(50));

            let total: usize = records.iter().map(|r| r.count).sum();
            for (i, record) in records.iter().enumerate() {
                println!("\nRecord {i}: {} individuals", record.count);
                for id in GeneId::ALL {
                    let alleles = record.alleles(id);
                    println!("  {id}: father {}, mother {}", alleles.father, alleles.mother);
                }
            }
            println!("\nTotal: {total} individuals");
        }
        _ => anyhow::bail!("Unknown format '{}'. Use: table or json", format),
    }

    Ok(())
}

fn run_simulation(
    mutations: &str,
    breakdown: &[String],
    max_population: usize,
    generations: usize,
    seed: Option<u64>,
    format: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let config = SimulationConfig::new(max_population, generations, seed)
        .context("Invalid simulation configuration")?;

    let mut sim = Simulation::from_spec(mutations, breakdown, config)
        .context("Failed to seed simulation")?;

    match format {
        "json" => {
            let mut history = Vec::with_capacity(generations + 1);
            history.push(sim.phenotype_counts()?);
            for _ in 0..generations {
                sim.step().context("Simulation step failed")?;
                history.push(sim.phenotype_counts()?);
            }
            let content = serde_json::to_string_pretty(&history)?;
            write_or_print(&content, output)?;
        }
        "pretty" => {
            println!("🧬 Mendevo - Running Simulation");
            println!("{}", "=".repeat(50));
            println!("Population size: {}", sim.population().size());
            println!("Generations: {generations}");
            if let Some(s) = seed {
                println!("Seed: {s}");
            } else {
                println!("Seed: random");
            }

            println!("\n{:>4} {:>6} {:>6} {:>6} {:>6}", "gen", "total", "fur", "ears", "teeth");
            print_tally(&sim)?;
            for _ in 0..generations {
                sim.step().context("Simulation step failed")?;
                print_tally(&sim)?;
            }

            println!("\n✓ Simulation complete!");
            println!("  Final generation: {}", sim.generation());
            println!("  Final population: {}", sim.population().size());
        }
        _ => anyhow::bail!("Unknown format '{}'. Use: pretty or json", format),
    }

    Ok(())
}

fn write_or_print(content: &str, output: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ Data exported to: {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}

fn print_tally(sim: &Simulation) -> Result<()> {
    let counts = sim.phenotype_counts()?;
    println!(
        "{:>4} {:>6} {:>6} {:>6} {:>6}",
        sim.generation(),
        counts.total,
        counts.mutant_fur,
        counts.mutant_ears,
        counts.mutant_teeth
    );
    Ok(())
}
