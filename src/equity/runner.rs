//! Parallel trial driver.
//!
//! Trials are split into fixed-size chunks. Each chunk owns its RNG, a
//! working copy of the card pool and a private `Tally`; chunks run on the
//! rayon pool and their tallies are summed at the end, so the hot path
//! takes no locks.
//!
//! The chunk layout depends only on the trial count and chunk `i` always
//! draws from the stream derived from `(seed, i)`. A seeded run therefore
//! produces the same counts on any number of threads.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::config::SimulationConfig;
use super::tally::Tally;
use crate::cards::Card;
use crate::error::Result;

/// Trials per chunk.
pub const CHUNK_TRIALS: u32 = 1024;

/// Run `config.trials` trials of `trial` and return the merged tally.
///
/// `trial` receives the chunk's working pool (a permutation of `pool`, in
/// whatever order the previous trial left it), the chunk RNG, and the
/// chunk tally to record into.
pub(crate) fn run_trials<F>(
    config: &SimulationConfig,
    pool: &[Card],
    participants: usize,
    trial: F,
) -> Result<Tally>
where
    F: Fn(&mut [Card], &mut StdRng, &mut Tally) + Sync,
{
    config.validate()?;

    let start = Instant::now();
    let chunks = chunk_sizes(config.trials);
    log::debug!(
        "running {} trials in {} chunks (pool {} cards, {} participants)",
        config.trials,
        chunks.len(),
        pool.len(),
        participants
    );

    let run = || {
        chunks
            .par_iter()
            .enumerate()
            .map(|(index, &count)| {
                let mut rng = chunk_rng(config.seed, index as u64);
                let mut scratch = pool.to_vec();
                let mut tally = Tally::new(participants);
                for _ in 0..count {
                    trial(&mut scratch, &mut rng, &mut tally);
                }
                log::trace!("chunk {} finished {} trials", index, count);
                tally
            })
            .reduce(|| Tally::new(participants), Tally::merge)
    };

    let tally = match config.num_threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(run),
        None => run(),
    };

    log::debug!(
        "finished {} trials in {:.3}s",
        tally.trials(),
        start.elapsed().as_secs_f64()
    );
    Ok(tally)
}

/// Split `trials` into chunks of at most `CHUNK_TRIALS`.
fn chunk_sizes(trials: u32) -> Vec<u32> {
    let full = trials / CHUNK_TRIALS;
    let rest = trials % CHUNK_TRIALS;
    let mut sizes = vec![CHUNK_TRIALS; full as usize];
    if rest > 0 {
        sizes.push(rest);
    }
    sizes
}

/// RNG for chunk `index`: derived from the seed if there is one, otherwise
/// from entropy.
fn chunk_rng(seed: Option<u64>, index: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(mix(seed, index)),
        None => StdRng::from_entropy(),
    }
}

/// SplitMix64 finalizer over the seed and chunk index.
fn mix(seed: u64, index: u64) -> u64 {
    let mut z = seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
