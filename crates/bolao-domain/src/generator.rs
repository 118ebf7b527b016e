//! Weighted-random game generation.
//!
//! A generated game mixes three sources: "lucky" numbers whose numerological
//! reduction is 1, the most frequent numbers of the last sixteen year-end
//! draws, and uniform fills that spread picks across the six decade bands.
//! The functions take any [`rand::RngExt`] so tests can seed the source.

use std::collections::BTreeSet;

use rand::RngExt;
use rand::seq::SliceRandom;

use crate::game::GAME_SIZE;

/// Year-end draw results, most recent first.
pub const PAST_RESULTS: [(i32, [i32; 6]); 16] = [
    (2024, [1, 17, 19, 29, 50, 57]),
    (2023, [21, 24, 33, 41, 48, 56]),
    (2022, [4, 5, 10, 34, 58, 59]),
    (2021, [12, 15, 23, 32, 33, 46]),
    (2020, [17, 20, 22, 35, 41, 42]),
    (2019, [3, 35, 38, 40, 57, 58]),
    (2018, [5, 10, 12, 18, 25, 33]),
    (2017, [3, 6, 10, 17, 34, 37]),
    (2016, [5, 11, 22, 24, 51, 53]),
    (2015, [2, 18, 31, 42, 51, 56]),
    (2014, [1, 5, 11, 16, 20, 56]),
    (2013, [20, 30, 36, 38, 47, 53]),
    (2012, [14, 32, 33, 36, 41, 52]),
    (2011, [3, 4, 29, 36, 45, 55]),
    (2010, [2, 10, 34, 37, 43, 50]),
    (2009, [10, 27, 40, 46, 49, 58]),
];

/// The seven playable numbers that reduce to 1 (2026 numerology).
pub const LUCKY_NUMBERS: [i32; 7] = [1, 10, 19, 28, 37, 46, 55];

/// How many of the ranked frequent numbers are eligible for selection.
const TOP_FREQUENT: usize = 15;

/// Games generated for a pool when no count is given.
pub const DEFAULT_GAME_COUNT: usize = 15;

/// Repeated digit-sum folding until a single digit remains.
///
/// Used by the generator to define [`LUCKY_NUMBERS`] and by clients to
/// highlight them.
pub fn reduce_to_digit(mut n: u32) -> u32 {
    while n > 9 {
        let mut sum = 0;
        while n > 0 {
            sum += n % 10;
            n /= 10;
        }
        n = sum;
    }
    n
}

/// Playable numbers ranked by how often they appear in [`PAST_RESULTS`],
/// most frequent first. Ties keep first-seen order.
fn frequency_ranking() -> Vec<i32> {
    let mut seen: Vec<(i32, u32)> = Vec::new();
    for (_, numbers) in &PAST_RESULTS {
        for &n in numbers {
            match seen.iter_mut().find(|(num, _)| *num == n) {
                Some((_, count)) => *count += 1,
                None => seen.push((n, 1)),
            }
        }
    }
    seen.sort_by(|a, b| b.1.cmp(&a.1));
    seen.into_iter().map(|(n, _)| n).collect()
}

/// Generate one game with the given random source.
///
/// 1. 1–3 lucky numbers, drawn without replacement.
/// 2. Up to 2 draws from the top-15 frequent numbers; duplicates are
///    silently skipped.
/// 3. Uniform fills that prefer decade bands with no pick yet, then the
///    full range once every band is covered.
///
/// Returns exactly [`GAME_SIZE`] distinct numbers, ascending.
pub fn generate_game_with<R: RngExt + ?Sized>(rng: &mut R) -> Vec<i32> {
    let mut numbers: BTreeSet<i32> = BTreeSet::new();

    let lucky_count = rng.random_range(1..=3);
    let mut lucky = LUCKY_NUMBERS;
    lucky.shuffle(rng);
    for &n in lucky.iter().take(lucky_count) {
        if numbers.len() < GAME_SIZE {
            numbers.insert(n);
        }
    }

    let ranking = frequency_ranking();
    let top = &ranking[..ranking.len().min(TOP_FREQUENT)];
    for _ in 0..2 {
        if numbers.len() >= GAME_SIZE {
            break;
        }
        numbers.insert(top[rng.random_range(0..top.len())]);
    }

    // Decade bands [1-10], [11-20], ..., [51-60].
    let mut band_counts = [0usize; 6];
    for &n in &numbers {
        band_counts[band_of(n)] += 1;
    }
    while numbers.len() < GAME_SIZE {
        let empty: Vec<usize> = (0..6).filter(|&b| band_counts[b] == 0).collect();
        let candidate = if empty.is_empty() {
            rng.random_range(1..=60)
        } else {
            let band = empty[rng.random_range(0..empty.len())] as i32;
            band * 10 + 1 + rng.random_range(0..10)
        };
        if numbers.insert(candidate) {
            band_counts[band_of(candidate)] += 1;
        }
    }

    numbers.into_iter().collect()
}

/// Generate one game from the thread-local random source.
pub fn generate_game() -> Vec<i32> {
    generate_game_with(&mut rand::rng())
}

/// Generate `count` independent games with the given random source.
///
/// Games within one batch carry no cross-game uniqueness guarantee: two
/// identical games in the same pool are accepted behavior.
pub fn generate_games_with<R: RngExt + ?Sized>(rng: &mut R, count: usize) -> Vec<Vec<i32>> {
    (0..count).map(|_| generate_game_with(rng)).collect()
}

/// Generate `count` independent games from the thread-local random source.
pub fn generate_games(count: usize) -> Vec<Vec<i32>> {
    generate_games_with(&mut rand::rng(), count)
}

fn band_of(n: i32) -> usize {
    ((n - 1) / 10) as usize
}
