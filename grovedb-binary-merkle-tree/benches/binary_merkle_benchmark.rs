use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use grovedb_binary_merkle_tree::{HashScheme, MerkleTree, verify};

fn values(count: u32) -> Vec<Vec<u8>> {
    (0..count).map(|i| i.to_le_bytes().to_vec()).collect()
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("binary merkle build");
        for size in [1_000u32, 10_000, 100_000] {
            let inputs = values(size);
            group.bench_with_input(BenchmarkId::new("sha256", size), &inputs, |b, inputs| {
                b.iter(|| MerkleTree::build(black_box(inputs)));
            });
            group.bench_with_input(BenchmarkId::new("blake3", size), &inputs, |b, inputs| {
                b.iter(|| MerkleTree::build_with_scheme(black_box(inputs), HashScheme::blake3()));
            });
        }
    }

    let inputs = values(100_001);
    let tree = MerkleTree::build(&inputs);
    let root = tree.root().expect("non-empty tree");

    c.bench_function("binary merkle prove", |b| {
        let mut index = 0usize;
        b.iter(|| {
            index = (index + 7919) % tree.leaf_count();
            tree.prove(black_box(index)).expect("valid index")
        });
    });

    c.bench_function("binary merkle verify", |b| {
        let proofs: Vec<_> = (0..1_000usize)
            .map(|i| {
                let index = (i * 97) % tree.leaf_count();
                (index, tree.prove(index).expect("valid index"))
            })
            .collect();
        let mut next = 0usize;
        b.iter(|| {
            let (index, proof) = &proofs[next % proofs.len()];
            next += 1;
            assert!(verify(&inputs[*index], proof, &root));
        });
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
);
criterion_main!(benches);
