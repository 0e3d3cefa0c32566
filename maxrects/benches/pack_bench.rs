use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use maxrects::io::ext_repr::ExtPiece;
use maxrects::io::import;
use maxrects::packer;

criterion_main!(benches);
criterion_group!(benches, allocate_bench);

const BIN_WIDTH: f64 = 1000.0;
const BIN_HEIGHT: f64 = 1000.0;

fn random_pieces(n_pieces: usize, rng: &mut SmallRng) -> Vec<ExtPiece> {
    (0..n_pieces)
        .map(|id| ExtPiece {
            id,
            width: rng.random_range(10..=400) as f64,
            height: rng.random_range(10..=400) as f64,
            hole: None,
        })
        .collect()
}

fn allocate_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate");
    for n_pieces in [100, 500, 1000] {
        let mut rng = SmallRng::seed_from_u64(0);
        let ext_pieces = random_pieces(n_pieces, &mut rng);
        let pieces = import::import_pieces(&ext_pieces).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(n_pieces), &pieces, |b, pieces| {
            b.iter(|| packer::allocate(pieces.clone(), BIN_WIDTH, BIN_HEIGHT).unwrap())
        });
    }
    group.finish();
}
