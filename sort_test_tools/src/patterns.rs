//! Input patterns for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// The seed used by every pattern in this process.
///
/// Resolved once: either from the `OVERRIDE_SEED` env var, to reproduce a
/// failure, or randomly per process. Test harnesses print it on first use.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => u64::from_str(&seed).expect("OVERRIDE_SEED must be a valid u64"),
        Err(_) => thread_rng().gen(),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn random_vec(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(len)
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    let mut rng = seeded_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values where the first `sorted_percent` of the slice is already sorted.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random_vec(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort();
    }

    vals
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = len / saw_count.max(1);

    for chunk in vals.chunks_mut(chunk_len) {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e));
    }

    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);
    let chunk_len = len / saw_count.max(1);
    let directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

/// Ascending and descending runs, randomly picked, with lengths drawn from `range`.
pub fn saw_mixed_range(len: usize, range: std::ops::Range<usize>) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(len);

    let max_chunks = len / range.start;
    let directions = random_uniform(max_chunks + 1, 0..=1);
    let chunk_lens = random_uniform(max_chunks + 1, (range.start as i32)..(range.end as i32));

    let mut i = 0;
    let mut l = 0;
    while l < len {
        let chunk_len = chunk_lens[i] as usize;
        let chunk_end = std::cmp::min(l + chunk_len, len);
        let chunk = &mut vals[l..chunk_end];

        if directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }

        i += 1;
        l += chunk_len;
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}
