use super::holes::HoleIterator;
use super::mode::Mode;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::error::DealError;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::ranking::Ranking;
use crate::evaluation::rule::Rule;

/// A hero hole together with the board as revealed so far.
///
/// Construction validates what the rest of the crate then takes for
/// granted: no card appears twice across hero and board, and the board
/// holds at most five cards. A card claimed twice used to just vanish
/// from the remaining deck; here it is a structured error instead.
/// After that, every operation is total and pure.
#[derive(Debug, Clone)]
pub struct Spot {
    hero: Hole,
    board: Board,
}

impl TryFrom<(Hole, Board)> for Spot {
    type Error = DealError;
    fn try_from((hero, board): (Hole, Board)) -> Result<Self, Self::Error> {
        if board.size() > 5 {
            return Err(DealError::Board(board.size()));
        }
        let mut dead = Hand::from(hero);
        for card in board.cards().iter().copied() {
            if dead.contains(&card) {
                return Err(DealError::Duplicate(card));
            }
            dead = Hand::add(dead, Hand::from(card));
        }
        Ok(Self { hero, board })
    }
}

impl Spot {
    pub fn hero(&self) -> &Hole {
        &self.hero
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        Street::from(self.board.size())
    }

    /// every card visible to the hero
    pub fn dead(&self) -> Hand {
        self.board
            .cards()
            .iter()
            .copied()
            .map(Hand::from)
            .fold(Hand::from(self.hero), Hand::add)
    }

    /// the 52-card universe minus the dead cards, in deck order
    pub fn deck(&self) -> Deck {
        Deck::from(self.dead().complement())
    }

    /// candidate holes in generation order
    pub fn combos(&self, mode: Mode) -> Vec<Hole> {
        match mode {
            Mode::Deck => HoleIterator::from(self.deck()).collect(),
            Mode::Table => {
                let hero = self.hero.cards();
                let board = self.board.cards();
                hero.iter()
                    .flat_map(|a| board.iter().map(move |b| Hole::from((*a, *b))))
                    .chain(HoleIterator::from(board.to_vec()))
                    .collect()
            }
        }
    }

    /// the hero's own rank category
    pub fn ranking(&self, rule: Rule) -> Ranking {
        Evaluator::from((self.hero, rule)).find_ranking()
    }

    /// candidates whose ranking strictly exceeds the hero's,
    /// in generation order, never re-sorted
    pub fn beats(&self, mode: Mode, rule: Rule) -> Vec<Hole> {
        let hero = self.ranking(rule);
        let candidates = self.combos(mode);
        let total = candidates.len();
        let combos = candidates
            .into_iter()
            .filter(|hole| Evaluator::from((*hole, rule)).find_ranking() > hero)
            .collect::<Vec<Hole>>();
        log::debug!(
            "{} of {} candidate {} combos beat {} ({})",
            combos.len(),
            total,
            mode,
            self.hero,
            hero
        );
        combos
    }
}

impl crate::Arbitrary for Spot {
    fn random() -> Self {
        use crate::Arbitrary;
        let mut deck = Deck::new();
        let hero = deck.hole();
        let street = Street::random();
        let board = (0..street.n_observed())
            .map(|_| deck.draw())
            .collect::<Vec<_>>();
        let board = Board::try_from(board).expect("at most five cards dealt");
        Self::try_from((hero, board)).expect("cards drawn without replacement")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::cards::card::Card;

    fn spot(hero: &str, board: &str) -> Spot {
        let hero = Hole::try_from(hero).unwrap();
        let board = Board::try_from(board).unwrap();
        Spot::try_from((hero, board)).unwrap()
    }

    #[test]
    fn rejects_duplicates() {
        let hero = Hole::try_from("5S 9H").unwrap();
        let board = Board::try_from("9H 6D 7C").unwrap();
        let nine = Card::try_from("9H").unwrap();
        assert_eq!(
            Spot::try_from((hero, board)).err(),
            Some(DealError::Duplicate(nine))
        );
    }

    #[test]
    fn deck_size_invariant() {
        for _ in 0..32 {
            let spot = Spot::random();
            assert_eq!(spot.deck().size(), 52 - spot.dead().size());
        }
    }

    #[test]
    fn every_board_size_accepted() {
        for board in ["", "2S 3D 4C", "2S 3D 4C 5H", "2S 3D 4C 5H 13D"] {
            let spot = spot("5S 9H", board);
            let _ = spot.beats(Mode::Deck, Rule::Dealt);
            let _ = spot.beats(Mode::Table, Rule::Dealt);
        }
    }

    #[test]
    fn table_mode_generation_order() {
        let spot = spot("5S 9H", "2S 3D 4C");
        let combos = spot.combos(Mode::Table);
        let order = combos
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<String>>();
        assert_eq!(
            order,
            vec![
                "5S, 2S", "5S, 3D", "5S, 4C", // hero card one across the board
                "9H, 2S", "9H, 3D", "9H, 4C", // hero card two across the board
                "2S, 3D", "2S, 4C", "3D, 4C", // board pairs i < j
            ]
        );
    }

    #[test]
    fn table_mode_empty_board() {
        let spot = spot("5S 9H", "");
        assert!(spot.combos(Mode::Table).is_empty());
    }

    #[test]
    fn deck_mode_counts_beating_combos() {
        // 50 unseen cards: C(50,2) = 1225 candidate holes, dealt low card
        // first by deck order. suited pairs: 2 * C(12,2) + 2 * C(13,2) = 288.
        // consecutive-value pairs: 192 - 16 touching 5S or 9H = 176.
        // overlap: 48 - 4 touching 5S or 9H = 44, of which the four
        // (10, 11) suited pairs are royal. everything suited or consecutive
        // outranks a HighCard hero, each combo exactly once.
        let spot = spot("5S 9H", "");
        assert_eq!(spot.ranking(Rule::Dealt), Ranking::HighCard);
        let beats = spot.beats(Mode::Deck, Rule::Dealt);
        assert_eq!(spot.combos(Mode::Deck).len(), 1225);
        let count = |ranking: Ranking| {
            beats
                .iter()
                .filter(|h| Evaluator::from(**h).find_ranking() == ranking)
                .count()
        };
        assert_eq!(count(Ranking::Flush), 244);
        assert_eq!(count(Ranking::Straight), 132);
        assert_eq!(count(Ranking::StraightFlush), 40);
        assert_eq!(count(Ranking::RoyalFlush), 4);
        assert_eq!(count(Ranking::HighCard), 0);
        assert_eq!(beats.len(), 420);
    }

    #[test]
    fn idempotent() {
        let spot = spot("5S 9H", "2S 3D 4C");
        assert_eq!(
            spot.beats(Mode::Deck, Rule::Dealt),
            spot.beats(Mode::Deck, Rule::Dealt)
        );
        assert_eq!(
            spot.beats(Mode::Table, Rule::Dealt),
            spot.beats(Mode::Table, Rule::Dealt)
        );
    }

    #[test]
    fn beating_combos_preserve_deck_order() {
        let spot = spot("5S 9H", "2S 3D 4C");
        let beats = spot.beats(Mode::Deck, Rule::Dealt);
        let combos = spot.combos(Mode::Deck);
        let positions = beats
            .iter()
            .map(|b| combos.iter().position(|c| c == b).unwrap())
            .collect::<Vec<usize>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
