use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use mendevo::base::{Allele, GeneId};
use mendevo::evolution::{litter, PunnettSquare};
use mendevo::genome::{GenePair, GenePool, Genotype, GenotypeOptions};
use mendevo::simulation::{parse_population_spec, Simulation, SimulationConfig};

fn het_pair(pool: &GenePool, id: GeneId) -> GenePair {
    GenePair::new(pool.gene(id), Allele::mutant(id), Allele::normal(id)).unwrap()
}

fn bench_punnett(c: &mut Criterion) {
    let mut pool = GenePool::new();
    pool.gene_mut(GeneId::Fur)
        .set_dominant(Allele::mutant(GeneId::Fur))
        .unwrap();
    let father = het_pair(&pool, GeneId::Fur);
    let mother = het_pair(&pool, GeneId::Fur);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

    let mut group = c.benchmark_group("punnett");

    group.bench_function("new", |b| {
        b.iter(|| black_box(PunnettSquare::new(black_box(&father), black_box(&mother), &mut rng)))
    });

    let square = PunnettSquare::new(&father, &mother, &mut rng).unwrap();
    group.bench_function("additional_cell", |b| {
        b.iter(|| {
            black_box(square.additional_cell(
                black_box(Allele::mutant(GeneId::Fur)),
                black_box(Allele::mutant(GeneId::Fur)),
            ))
        })
    });

    group.finish();
}

fn bench_reproduction(c: &mut Criterion) {
    let mut pool = GenePool::new();
    for id in GeneId::ALL {
        pool.gene_mut(id).set_dominant(Allele::normal(id)).unwrap();
    }
    let options = GenotypeOptions {
        father_fur: Allele::mutant(GeneId::Fur),
        father_ears: Allele::mutant(GeneId::Ears),
        father_teeth: Allele::mutant(GeneId::Teeth),
        ..Default::default()
    };
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let father = Genotype::new(&pool, &options, &mut rng).unwrap();
    let mother = Genotype::new(&pool, &options, &mut rng).unwrap();

    c.bench_function("litter", |b| {
        b.iter(|| black_box(litter(&father, &mother, &pool, &mut rng)))
    });
}

fn bench_spec_parsing(c: &mut Criterion) {
    let expressions: Vec<String> = vec![
        "35FFeEtt".to_string(),
        "20Ffeett".to_string(),
        "15ffEETt".to_string(),
    ];

    c.bench_function("parse_population_spec", |b| {
        b.iter(|| {
            let mut pool = GenePool::new();
            black_box(parse_population_spec(
                black_box("FEt"),
                black_box(&expressions),
                &mut pool,
                750,
            ))
        })
    });
}

fn bench_simulation_step(c: &mut Criterion) {
    c.bench_function("simulation_step_100", |b| {
        let config = SimulationConfig {
            max_population: 100,
            generations: 1,
            seed: Some(42),
        };
        let expressions = vec!["50Ff".to_string()];
        b.iter(|| {
            let mut sim =
                Simulation::from_spec("F", &expressions, config.clone()).unwrap();
            sim.step().unwrap();
            black_box(sim.population().size())
        })
    });
}

criterion_group!(
    benches,
    bench_punnett,
    bench_reproduction,
    bench_spec_parsing,
    bench_simulation_step
);
criterion_main!(benches);
