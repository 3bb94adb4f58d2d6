/// A playing card as a structural (rank, suit) pair.
///
/// Copied by value everywhere. Equality is structural: both rank
/// and suit must match.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Parses a whitespace-separated list of card notations.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split_whitespace().map(Self::try_from).collect()
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
///
/// each card is mapped to its location in a sorted deck 0..52
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.rank) * 4 + u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism
///
/// two characters, rank then suit, e.g. "As" or "Tc"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match (s.len(), s.get(0..1), s.get(1..2)) {
            (2, Some(rank), Some(suit)) => {
                let rank = Rank::try_from(rank)?;
                let suit = Suit::try_from(suit)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("expected 2 characters: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}

use super::rank::Rank;
use super::suit::Suit;
