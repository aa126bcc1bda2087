use std::io;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use workload_generator_algo::Basic;
use workload_generator_algo::Generator;
use workload_generator_algo::Parameterized;
use workload_generator_rt::Script;
use workload_types::Config;

pub fn in_memory(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("basic", |b| {
        b.iter_batched(
            || Generator::new(Basic::default()),
            |mut generator| {
                let mut script = Script::new(io::sink());
                black_box(script.write(&mut generator, &mut rng))
            },
            BatchSize::SmallInput,
        );
    });

    let config = Config::new(40, 100, 5_000).expect("a valid configuration");

    c.bench_function("parameterized", |b| {
        b.iter_batched(
            || Generator::new(Parameterized::new(&config)),
            |mut generator| {
                let mut script = Script::new(io::sink());
                black_box(script.write(&mut generator, &mut rng))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, in_memory);
criterion_main!(benches);
