use super::summary::Summary;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;
use crate::cards::strength::Strength;
use std::time::Instant;

/// Monte Carlo equity engine for one hero hand against one random villain.
///
/// Owns a single Deck across the whole run. Every trial rebuilds the deck,
/// excludes the known cards, shuffles, deals the villain's hole cards and
/// the missing board cards, and scores the showdown into the Summary.
/// Fixed-length: all requested trials run, no early stopping.
pub struct Engine {
    hole: Hole,
    board: Board,
    deck: Deck,
}

impl Engine {
    /// entropy-seeded engine; repeated program runs diverge
    pub fn new(hole: Hole, board: Board) -> Self {
        Self::from((hole, board, Deck::new()))
    }

    /// deterministic engine for reproducible runs
    pub fn seeded(hole: Hole, board: Board, seed: u64) -> Self {
        Self::from((hole, board, Deck::seeded(seed)))
    }

    pub fn hole(&self) -> Hole {
        self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self, trials: usize) -> Summary {
        debug_assert!(trials > 0);
        log::info!(
            "simulating {} trials of {} on {} ({})",
            trials,
            self.hole,
            self.board,
            self.board.street(),
        );
        let start = Instant::now();
        let known = self.known();
        let missing = self.board.street().n_unobserved();
        let mut summary = Summary::empty();
        for _ in 0..trials {
            self.deck.reset();
            self.deck.remove(&known);
            self.deck.shuffle();
            let villain = self.deck.deal(2);
            let runout = self.deck.deal(missing);
            let hero = self.showdown(self.hole.cards().to_vec(), &runout);
            let villain = self.showdown(villain, &runout);
            summary.tally(hero, villain);
        }
        let elapsed = start.elapsed();
        log::info!(
            "{} trials in {:.3}s ({:.0} trials/s)",
            trials,
            elapsed.as_secs_f64(),
            trials as f64 / elapsed.as_secs_f64(),
        );
        summary
    }

    /// hero's hole cards and the known board
    fn known(&self) -> Vec<Card> {
        self.hole
            .cards()
            .into_iter()
            .chain(self.board.cards().iter().copied())
            .collect()
    }

    /// evaluate a 7-card pool of private cards, known board, and runout
    fn showdown(&self, mut pool: Vec<Card>, runout: &[Card]) -> Strength {
        pool.extend_from_slice(self.board.cards());
        pool.extend_from_slice(runout);
        Strength::from(pool.as_slice())
    }
}

impl From<(Hole, Board, Deck)> for Engine {
    fn from((hole, board, deck): (Hole, Board, Deck)) -> Self {
        debug_assert!(hole.cards().iter().all(|c| !board.contains(c)));
        Self { hole, board, deck }
    }
}
