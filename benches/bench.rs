use avl::Map;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

macro_rules! map_insert_rand_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = StdRng::seed_from_u64(0);
            let mut map = Map::new();

            // setup
            for _ in 0..n {
                let i = rng.gen::<usize>() % n;
                map.insert(i, i);
            }

            // measure
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let k = rng.gen::<usize>() % n;
                    map.insert(k, k);
                    map.remove(&k);
                })
            });

            black_box(map);
        }
    };
}

macro_rules! map_insert_seq_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = Map::new();

            // setup
            for i in 0..n {
                map.insert(i * 2, i * 2);
            }

            // measure
            let mut i = 1;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    map.insert(i, i);
                    map.remove(&i);
                    i = (i + 2) % n;
                })
            });

            black_box(map);
        }
    };
}

macro_rules! map_find_rand_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = StdRng::seed_from_u64(0);
            let mut map = Map::new();

            // setup
            let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

            for &k in &keys {
                map.insert(k, k);
            }

            keys.shuffle(&mut rng);

            // measure
            let mut i = 0;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let t = map.get(&keys[i]);
                    i = (i + 1) % n;
                    black_box(t);
                })
            });
        }
    };
}

macro_rules! map_find_seq_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = Map::new();

            // setup
            for i in 0..n {
                map.insert(i, i);
            }

            // measure
            let mut i = 0;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let x = map.get(&i);
                    i = (i + 1) % n;
                    black_box(x);
                })
            });
        }
    };
}

macro_rules! map_iter_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = StdRng::seed_from_u64(0);
            let mut map = Map::<u32, u32>::new();

            for _ in 0..n {
                map.insert(rng.gen(), rng.gen());
            }

            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    for entry in map.iter() {
                        black_box(entry);
                    }
                })
            });
        }
    };
}

map_insert_rand_bench!{insert_rand_100,    100}
map_insert_rand_bench!{insert_rand_10_000, 10_000}

map_insert_seq_bench!{insert_seq_100,    100}
map_insert_seq_bench!{insert_seq_10_000, 10_000}

map_find_rand_bench!{find_rand_100,    100}
map_find_rand_bench!{find_rand_10_000, 10_000}

map_find_seq_bench!{find_seq_100,    100}
map_find_seq_bench!{find_seq_10_000, 10_000}

map_iter_bench!{iter_100,    100}
map_iter_bench!{iter_10_000, 10_000}

criterion_group!(
    benches,
    insert_rand_100,
    insert_rand_10_000,
    insert_seq_100,
    insert_seq_10_000,
    find_rand_100,
    find_rand_10_000,
    find_seq_100,
    find_seq_10_000,
    iter_100,
    iter_10_000,
);
criterion_main!(benches);
