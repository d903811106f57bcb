//! Engine Registry
//!
//! One catalog of every playable engine, so drivers resolve user-facing
//! engine keys the same way everywhere. The set is a closed enum rather
//! than a plugin table; adding an engine means adding a variant here.

use minimax_engine::{MinimaxEngine, SearchConfig};
use random_engine::RandomEngine;
use reversi_core::Engine;

/// The engines that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    Minimax,
    Random,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Minimax, EngineKind::Random];

    /// Canonical key used on the command line and in reports
    pub fn key(self) -> &'static str {
        match self {
            EngineKind::Minimax => "minimax",
            EngineKind::Random => "random",
        }
    }

    /// Short human-readable name
    pub fn label(self) -> &'static str {
        match self {
            EngineKind::Minimax => "Minimax",
            EngineKind::Random => "Trivial Random",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            EngineKind::Minimax => {
                "Built-in minimax engine with alpha-beta pruning and light randomization."
            }
            EngineKind::Random => "Random legal move generator useful for debugging.",
        }
    }

    /// Whether a configured search depth means anything to this engine
    pub fn supports_depth(self) -> bool {
        match self {
            EngineKind::Minimax => true,
            EngineKind::Random => false,
        }
    }

    /// Resolves a user-supplied key, accepting legacy aliases.
    pub fn from_key(key: &str) -> Option<EngineKind> {
        match key.to_lowercase().as_str() {
            "minimax" => Some(EngineKind::Minimax),
            "random" | "trivial" => Some(EngineKind::Random),
            _ => None,
        }
    }
}

/// Options shared by every engine constructor. Fields an engine does not
/// understand are ignored, so one options value works for any kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOptions {
    /// Search depth override for engines that search
    pub depth: Option<u8>,
    /// RNG seed for reproducible games
    pub seed: Option<u64>,
    /// Whether the searching engine varies its play between games
    pub randomize: Option<bool>,
    /// Candidate pool size for weighted selection
    pub top_k: Option<usize>,
    /// Softmax temperature for weighted selection
    pub temperature: Option<f64>,
}

/// Builds a ready-to-play engine of the given kind.
pub fn build_engine(kind: EngineKind, options: &EngineOptions) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => {
            let mut config = SearchConfig::default();
            if let Some(depth) = options.depth {
                config.depth = depth;
            }
            if let Some(randomize) = options.randomize {
                config.randomize = randomize;
            }
            if let Some(top_k) = options.top_k {
                config.top_k = top_k;
            }
            if let Some(temperature) = options.temperature {
                config.temperature = temperature;
            }
            config.seed = options.seed;
            Box::new(MinimaxEngine::new(config))
        }
        EngineKind::Random => match options.seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi_core::{Board, Color};

    #[test]
    fn test_every_kind_resolves_its_own_key() {
        for kind in EngineKind::ALL {
            assert_eq!(EngineKind::from_key(kind.key()), Some(kind));
        }
    }

    #[test]
    fn test_aliases_and_case_are_accepted() {
        assert_eq!(EngineKind::from_key("trivial"), Some(EngineKind::Random));
        assert_eq!(EngineKind::from_key("MINIMAX"), Some(EngineKind::Minimax));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(EngineKind::from_key("alphazero"), None);
    }

    #[test]
    fn test_depth_support_flags() {
        assert!(EngineKind::Minimax.supports_depth());
        assert!(!EngineKind::Random.supports_depth());
    }

    #[test]
    fn test_selection_options_reach_the_searcher() {
        let board = Board::new(8);
        let valid = board.valid_moves(Color::Black);
        let options = EngineOptions {
            depth: Some(2),
            randomize: Some(false),
            ..Default::default()
        };

        // With randomization off the seed is irrelevant: both engines argmax.
        let mut first = build_engine(EngineKind::Minimax, &EngineOptions {
            seed: Some(1),
            ..options
        });
        let mut second = build_engine(EngineKind::Minimax, &EngineOptions {
            seed: Some(2),
            ..options
        });

        assert_eq!(
            first.pick_move(board.clone(), Color::Black, &valid),
            second.pick_move(board.clone(), Color::Black, &valid)
        );
    }

    #[test]
    fn test_built_engines_play_legal_moves() {
        let board = Board::new(8);
        let valid = board.valid_moves(Color::Black);
        let options = EngineOptions {
            depth: Some(2),
            seed: Some(9),
            ..Default::default()
        };

        for kind in EngineKind::ALL {
            let mut engine = build_engine(kind, &options);
            let picked = engine.pick_move(board.clone(), Color::Black, &valid);
            assert!(
                picked.map_or(false, |mv| valid.contains(&mv)),
                "{} must return a legal move",
                engine.name()
            );
        }
    }
}
