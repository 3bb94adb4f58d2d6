use super::card::Card;
use super::street::Street;

/// The known community cards: 0, 3, 4, or 5 of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn empty() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn street(&self) -> Street {
        Street::from(self.0.len())
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// grow the board one card at a time, e.g. from interactive entry
    pub fn push(&mut self, card: Card) {
        assert!(self.0.len() < 5);
        assert!(!self.0.contains(&card));
        self.0.push(card);
    }
}

/// str isomorphism
///
/// whitespace-separated cards; the empty string is a preflop board
impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        match cards.len() {
            0 | 3 | 4 | 5 => match cards
                .iter()
                .enumerate()
                .find(|(i, c)| cards[..*i].contains(*c))
                .map(|(_, c)| *c)
            {
                Some(c) => Err(format!("duplicate board card: {}", c)),
                None => Ok(Self(cards)),
            },
            n => Err(format!("board must hold 0, 3, 4, or 5 cards, got {}", n)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
