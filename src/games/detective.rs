//! IP Detective: spot the valid addresses among the imposters.

use crate::models::parse_address;
use crate::session::DETECTIVE_POINTS;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Candidates shown per round.
pub const ROUND_SIZE: usize = 6;

/// One round of candidates, reproducible from its seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectiveRound {
    pub seed: u64,
    pub options: Vec<String>,
}

/// Result of checking a set of picks against a round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetectiveOutcome {
    /// Picked and valid.
    pub correct: Vec<usize>,
    /// Picked but an imposter.
    pub wrong: Vec<usize>,
    /// Valid but not picked.
    pub missed: Vec<usize>,
    pub points: u32,
}

impl DetectiveRound {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let valid_count = rng.gen_range(2..=4);
        let mut options: Vec<String> = (0..ROUND_SIZE)
            .map(|i| {
                if i < valid_count {
                    valid_candidate(&mut rng)
                } else {
                    imposter(&mut rng)
                }
            })
            .collect();
        options.shuffle(&mut rng);
        log::debug!("detective round seed={seed} options={options:?}");
        DetectiveRound { seed, options }
    }

    /// Indices of the options that parse as addresses.
    pub fn valid_indices(&self) -> BTreeSet<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| parse_address(o).is_ok())
            .map(|(i, _)| i)
            .collect()
    }

    /// Score a set of picked indices. Full points only for an exact match;
    /// duplicate and out-of-range picks are ignored.
    pub fn check(&self, picks: &[usize]) -> DetectiveOutcome {
        let valid = self.valid_indices();
        let picked: BTreeSet<usize> = picks
            .iter()
            .copied()
            .filter(|i| *i < self.options.len())
            .collect();
        let outcome = DetectiveOutcome {
            correct: picked.intersection(&valid).copied().collect(),
            wrong: picked.difference(&valid).copied().collect(),
            missed: valid.difference(&picked).copied().collect(),
            points: if picked == valid { DETECTIVE_POINTS } else { 0 },
        };
        log::info!(
            "detective round seed={} picks={picks:?} -> {} points",
            self.seed,
            outcome.points
        );
        outcome
    }
}

fn valid_candidate(rng: &mut StdRng) -> String {
    let octets: [u8; 4] = rng.gen();
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

fn imposter(rng: &mut StdRng) -> String {
    let [a, b, c, d]: [u8; 4] = rng.gen();
    match rng.gen_range(0..5) {
        0 => format!("{a}.{b}.{c}.{}", rng.gen_range(256..=999)),
        1 => format!("{a}.{b}.{c}"),
        2 => format!("{a}.{b}.{c}.{d}.{}", rng.gen_range(0..=255)),
        3 => format!("{a}.{b}.O.{d}"),
        _ => format!("{a}.{b}.{c}.-{d}"),
    }
}
