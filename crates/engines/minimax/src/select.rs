//! Weighted selection over scored root moves.
//!
//! The search hands back every root move with its score; selection either
//! takes the argmax or samples from a softmax over the top scorers, which
//! keeps play varied without wandering far from the best line.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use reversi_core::Coord;

/// Picks the highest-scoring move, keeping the earliest on ties.
///
/// `scored` must be non-empty.
pub(crate) fn argmax_move(scored: &[(Coord, f64)]) -> Coord {
    let mut best = scored[0];
    for &(mv, score) in &scored[1..] {
        if score > best.1 {
            best = (mv, score);
        }
    }
    best.0
}

/// Samples a move from a softmax distribution over the top-k candidates.
///
/// `scored` must be non-empty and its scores finite.
pub(crate) fn select_move<R: Rng>(
    scored: &[(Coord, f64)],
    top_k: usize,
    temperature: f64,
    rng: &mut R,
) -> Coord {
    let candidates = top_candidates(scored, top_k);
    if candidates.len() == 1 {
        return candidates[0].0;
    }

    let scores: Vec<f64> = candidates.iter().map(|&(_, score)| score).collect();
    let weights = softmax_weights(&scores, temperature);

    match WeightedIndex::new(&weights) {
        Ok(dist) => candidates[dist.sample(rng)].0,
        Err(_) => candidates[0].0,
    }
}

/// Keeps every move scoring at least as well as the k-th best.
///
/// Ties at the cutoff widen the candidate set rather than being dropped,
/// so equal moves stay equally likely. The sort is stable; equal scores
/// keep their row-major order.
pub(crate) fn top_candidates(scored: &[(Coord, f64)], top_k: usize) -> Vec<(Coord, f64)> {
    let mut ordered = scored.to_vec();
    ordered.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let cutoff_index = top_k.min(ordered.len()) - 1;
    let cutoff = ordered[cutoff_index].1;
    ordered.retain(|&(_, score)| score >= cutoff);
    ordered
}

/// Normalized softmax weights, shifted by the max score for stability.
///
/// Falls back to uniform weights if the total fails to come out positive.
pub(crate) fn softmax_weights(scores: &[f64], temperature: f64) -> Vec<f64> {
    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores
        .iter()
        .map(|score| ((score - max_score) / temperature).exp())
        .collect();

    let total: f64 = exps.iter().sum();
    if total <= 0.0 {
        return vec![1.0; exps.len()];
    }
    exps.into_iter().map(|exp| exp / total).collect()
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod select_tests;
