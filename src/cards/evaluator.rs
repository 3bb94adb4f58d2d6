use super::card::Card;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A2345, with the Ace playing low
const WHEEL: u16 = 0b_1000000001111;

/// Evaluates a 5..=7 card pool into the best 5-card hand.
///
/// One pass tallies per-rank counts, per-suit counts, and per-suit rank
/// masks; category searches then run best-first over those tallies, so
/// the first hit is the strongest 5-card combination in the pool.
/// Total over any duplicate-free pool, independent of input order.
pub struct Evaluator {
    rank_counts: [u8; 13],
    suit_counts: [u8; 4],
    suit_ranks: [u16; 4],
    ranks: u16,
}

impl From<&[Card]> for Evaluator {
    fn from(pool: &[Card]) -> Self {
        let mut this = Self {
            rank_counts: [0; 13],
            suit_counts: [0; 4],
            suit_ranks: [0; 4],
            ranks: 0,
        };
        for card in pool {
            let rank = u8::from(card.rank()) as usize;
            let suit = u8::from(card.suit()) as usize;
            this.rank_counts[rank] += 1;
            this.suit_counts[suit] += 1;
            this.suit_ranks[suit] |= u16::from(card.rank());
            this.ranks |= u16::from(card.rank());
        }
        this
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .or_else(|| self.find_1_oak())
            .expect("at least one card in pool")
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking {
            Ranking::Flush(hi) => self.find_flush_kickers(hi),
            _ => match ranking.n_kickers() {
                0 => Kickers::none(),
                n => Self::top_n_of(self.ranks & ranking.mask(), n),
            },
        }
    }

    /// keep the n highest bits of a rank mask
    fn top_n_of(ranks: u16, n: usize) -> Kickers {
        let mut ranks = ranks;
        while n < ranks.count_ones() as usize {
            ranks &= ranks - 1; // clear lowest
        }
        Kickers::from(ranks)
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            // a second three of a kind acts as the pair
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.ranks).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| self.suit_ranks[u8::from(suit) as usize])
            .map(|ranks| Ranking::Flush(Rank::from(ranks)))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| self.suit_ranks[u8::from(suit) as usize])
            .and_then(Self::find_rank_of_straight)
            .map(Ranking::StraightFlush)
    }

    /// the four flush cards below the top one, suit-restricted
    fn find_flush_kickers(&self, hi: Rank) -> Kickers {
        self.find_suit_of_flush()
            .map(|suit| self.suit_ranks[u8::from(suit) as usize])
            .map(|ranks| Self::top_n_of(ranks & !u16::from(hi), 4))
            .expect("flush ranking implies a flush suit")
    }

    /// four shift-AND folds leave a bit at the top of every 5-run;
    /// the wheel is the one straight the folds cannot see
    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == WHEEL & ranks {
            Some(Rank::Five)
        } else {
            None
        }
    }

    fn find_suit_of_flush(&self) -> Option<Suit> {
        self.suit_counts
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }

    /// highest rank held at least n times, optionally skipping one rank
    fn find_rank_of_n_oak(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| Some(*r) != skip)
            .find(|r| self.rank_counts[u8::from(*r) as usize] >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::strength::Strength;

    fn evaluator(s: &str) -> Evaluator {
        Evaluator::from(Card::parse(s).expect("valid cards").as_slice())
    }

    #[test]
    fn high_card() {
        let eval = evaluator("As Kh Qd Jc 9s");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn one_pair() {
        let eval = evaluator("As Ah Kd Qc Js");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let eval = evaluator("As Ah Kd Kc Qs");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn three_oak() {
        let eval = evaluator("As Ah Ad Kc Qs");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::ThreeOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let eval = evaluator("Ts Jh Qd Kc As");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(kickers, Kickers::none());
    }

    #[test]
    fn flush() {
        let eval = evaluator("As Ks Qs Js 9s");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn full_house() {
        let eval = evaluator("2s 2h 2d 3c 3s");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(kickers, Kickers::none());
    }

    #[test]
    fn four_oak() {
        let eval = evaluator("As Ah Ad Ac Ks");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let eval = evaluator("Ts Js Qs Ks As");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert_eq!(kickers, Kickers::none());
    }

    #[test]
    fn wheel_straight() {
        let eval = evaluator("As 2h 3d 4c 5s");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let eval = evaluator("As 2s 3s 4s 5s");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn low_straight() {
        let eval = evaluator("As 2s 3h 4d 5c 6s");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn seven_card_pool() {
        let eval = evaluator("As Ah Kd Kc Qs Jh 9d");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn flush_over_straight() {
        let eval = evaluator("4h 6h 7h 8h 9h Ts");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(
            eval.find_kickers(ranking),
            Kickers::from(vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Four])
        );
    }

    #[test]
    fn full_house_over_flush() {
        let eval = evaluator("Kh Ah Ad As Ks Qs Js 9s");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn four_oak_over_full_house() {
        let eval = evaluator("As Ah Ad Ac Ks Kh Qd");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::FourOAK(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush_over_four_oak() {
        let eval = evaluator("Ts Js Qs Ks As Ah Ad Ac");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn three_pair() {
        // only the two highest pairs play; the third pair's rank
        // is still the best remaining kicker
        let eval = evaluator("As Ah Kd Kc Qs Qh Jd");
        let ranking = eval.find_ranking();
        let kickers = eval.find_kickers(ranking);
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn two_three_oak() {
        let eval = evaluator("As Ah Ad Kc Ks Kh Qd");
        let ranking = eval.find_ranking();
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn order_of_input_is_irrelevant() {
        let mut deck = Deck::seeded(7);
        deck.shuffle();
        let mut pool = deck.deal(7);
        let forward = Strength::from(pool.as_slice());
        pool.reverse();
        let backward = Strength::from(pool.as_slice());
        assert_eq!(forward, backward);
    }

    #[test]
    fn total_over_random_pools() {
        for _ in 0..100 {
            let mut deck = Deck::new();
            deck.reset();
            deck.shuffle();
            let pool = deck.deal(7);
            let _ = Strength::from(pool.as_slice());
        }
    }

    #[test]
    fn category_never_outranked_by_kickers() {
        let pair = Strength::from(Evaluator::from(
            Card::parse("2s 2h 3d 4c 5s").unwrap().as_slice(),
        ));
        let high = Strength::from(Evaluator::from(
            Card::parse("As Kh Qd Jc 9s").unwrap().as_slice(),
        ));
        assert!(pair > high);
    }
}
