use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared helpers for the integration tests. Not every test binary uses all of them.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random shape of rank `1..=max_rank` with dimensions in `1..=6`.
#[allow(dead_code)]
pub fn random_shape(rng: &mut StdRng, max_rank: usize) -> Vec<usize> {
    let rank = rng.gen_range(1..=max_rank);
    (0..rank).map(|_| rng.gen_range(1..=6)).collect()
}

/// Random non-empty set of distinct axes for `rank`, some given as negative indices.
#[allow(dead_code)]
pub fn random_axes(rng: &mut StdRng, rank: usize) -> Vec<isize> {
    let mut axes: Vec<isize> = (0..rank as isize).filter(|_| rng.gen_bool(0.5)).collect();
    if axes.is_empty() {
        axes.push(rng.gen_range(0..rank) as isize);
    }
    axes.iter()
        .map(|&a| if rng.gen_bool(0.3) { a - rank as isize } else { a })
        .collect()
}
