use super::card::Card;

/// A player's two private cards.
///
/// Construction asserts distinctness; duplicate hole cards are a
/// caller precondition violation, not a recoverable error.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self([a, b])
    }
}

/// str isomorphism
///
/// two cards, whitespace separated, e.g. "Ah Kd"
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            &[a, b] if a != b => Ok(Self([a, b])),
            &[a, b] if a == b => Err(format!("duplicate hole card: {}", a)),
            cards => Err(format!("expected 2 cards, got {}", cards.len())),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.0[0], self.0[1])
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        let mut deck = super::deck::Deck::new();
        deck.shuffle();
        match deck.deal(2).as_slice() {
            &[a, b] => Self::from((a, b)),
            _ => unreachable!("fresh deck holds 52 cards"),
        }
    }
}
