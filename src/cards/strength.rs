use super::card::Card;
use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's total-order strength: category-resolving ranking first,
/// kicker cards second.
///
/// Constructed from the 5..=7 card pool of hole plus board cards. Two
/// strengths compare the way showdowns are scored: the better ranking
/// wins outright, equal rankings fall through to kickers, and full
/// equality is a chopped pot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    ranking: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kicks): (Ranking, Kickers)) -> Self {
        Self { ranking, kicks }
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(ranking);
        Self { ranking, kicks }
    }
}

impl From<&[Card]> for Strength {
    fn from(pool: &[Card]) -> Self {
        Self::from(Evaluator::from(pool))
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.ranking, self.kicks)
    }
}
