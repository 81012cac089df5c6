use super::ranking::Ranking;
use super::rule::Rule;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;

/// Classifies a two-card hole into its rank category.
///
/// Total and pure: every well-formed hole classifies, nothing is mutated,
/// and identical inputs always produce identical rankings. With only two
/// cards, "straight" degenerates to consecutive values and "royal" to a
/// straight flush whose low card is the ten. No value multiplicities are
/// inspected, so pairs fall through to HighCard.
pub struct Evaluator(Hole, Rule);

impl From<Hole> for Evaluator {
    fn from(hole: Hole) -> Self {
        Self(hole, Rule::default())
    }
}
impl From<(Hole, Rule)> for Evaluator {
    fn from((hole, rule): (Hole, Rule)) -> Self {
        Self(hole, rule)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_high_card())
            .expect("two cards in Hole")
    }

    fn find_royal_flush(&self) -> Option<Ranking> {
        (self.suited() && self.running() && self.lowest() == Rank::Ten)
            .then_some(Ranking::RoyalFlush)
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.suited() && self.running()).then_some(Ranking::StraightFlush)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.suited().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.running().then_some(Ranking::Straight)
    }
    fn find_high_card(&self) -> Option<Ranking> {
        Some(Ranking::HighCard)
    }

    fn suited(&self) -> bool {
        let [a, b] = self.0.cards();
        a.suit() == b.suit()
    }
    /// consecutive values in scan order, which Rule decides
    fn running(&self) -> bool {
        let [a, b] = match self.1 {
            Rule::Dealt => *self.0.cards(),
            Rule::Sorted => *self.0.sorted().cards(),
        };
        b.rank().value() == a.rank().value() + 1
    }
    fn lowest(&self) -> Rank {
        self.0.sorted().cards()[0].rank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(s: &str) -> Ranking {
        Evaluator::from(Hole::try_from(s).unwrap()).find_ranking()
    }
    fn sorted_ranking(s: &str) -> Ranking {
        Evaluator::from((Hole::try_from(s).unwrap(), Rule::Sorted)).find_ranking()
    }

    #[test]
    fn royal_flush() {
        assert_eq!(ranking("10S 11S"), Ranking::RoyalFlush);
    }

    #[test]
    fn straight_flush_below_royal() {
        assert_eq!(ranking("9S 10S"), Ranking::StraightFlush);
    }

    #[test]
    fn flush() {
        assert_eq!(ranking("2H 9H"), Ranking::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(ranking("7C 8D"), Ranking::Straight);
    }

    #[test]
    fn high_card() {
        assert_eq!(ranking("2H 9D"), Ranking::HighCard);
    }

    #[test]
    fn no_pair_detection() {
        assert_eq!(ranking("9H 9D"), Ranking::HighCard);
    }

    #[test]
    fn dealt_order_sensitivity() {
        assert_eq!(ranking("5S 6S"), Ranking::StraightFlush);
        assert_eq!(ranking("6S 5S"), Ranking::Flush);
        assert_eq!(ranking("7C 6D"), Ranking::HighCard);
    }

    #[test]
    fn sorted_order_insensitivity() {
        assert_eq!(sorted_ranking("5S 6S"), Ranking::StraightFlush);
        assert_eq!(sorted_ranking("6S 5S"), Ranking::StraightFlush);
        assert_eq!(sorted_ranking("11S 10S"), Ranking::RoyalFlush);
    }

    #[test]
    fn ace_is_high_only() {
        // no wheel: the ace never wraps around to play low
        assert_eq!(ranking("14S 2S"), Ranking::Flush);
        assert_eq!(ranking("13D 14D"), Ranking::StraightFlush);
    }
}
