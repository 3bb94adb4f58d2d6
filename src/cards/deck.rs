use super::card::Card;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A mutable deck of up to 52 unique cards with an owned random source.
///
/// The RNG is seeded once at construction, from OS entropy by default or
/// from an explicit seed for reproducible simulations. One Deck lives for
/// one engine run; `reset` + `remove` + `shuffle` happen every trial so
/// no cards leak across trials.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new() -> Self {
        Self::from(SmallRng::from_os_rng())
    }
    pub fn seeded(seed: u64) -> Self {
        Self::from(SmallRng::seed_from_u64(seed))
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// restore all 52 distinct (rank, suit) combinations
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend((0..52u8).map(Card::from));
    }

    /// set-difference against the known cards; absent cards are a no-op
    pub fn remove(&mut self, known: &[Card]) {
        for card in known {
            if let Some(i) = self.cards.iter().position(|c| c == card) {
                self.cards.swap_remove(i);
            }
        }
    }

    /// uniform permutation of the remaining cards
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// remove and return the top `n` cards, fewer if the deck runs out
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        debug_assert!(n <= self.cards.len(), "deck underflow");
        let n = n.min(self.cards.len());
        self.cards.split_off(self.cards.len() - n)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SmallRng> for Deck {
    fn from(rng: SmallRng) -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(52),
            rng,
        };
        deck.reset();
        deck
    }
}
