use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hole::Hole;

/// HoleIterator yields every unordered pair of cards from a fixed list.
///
/// Pairs come out in nested-loop order: (cards[i], cards[j]) for i < j,
/// outer index advancing last. Built from a Deck, the list is already in
/// deck order, so pair order is fully deterministic and every combo
/// listing downstream inherits it.
/// it is deterministic because it always iterates in the same order
/// it is exact because size_hint counts the remaining pairs precisely
pub struct HoleIterator {
    cards: Vec<Card>,
    i: usize,
    j: usize,
}

impl HoleIterator {
    pub fn combinations(&self) -> usize {
        let n = self.cards.len();
        n * n.saturating_sub(1) / 2
    }

    fn remaining(&self) -> usize {
        let n = self.cards.len();
        let done = self.i * n - self.i * (self.i + 1) / 2 + (self.j - self.i - 1);
        self.combinations() - done
    }
}

impl From<Vec<Card>> for HoleIterator {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards, i: 0, j: 1 }
    }
}

impl From<Deck> for HoleIterator {
    fn from(deck: Deck) -> Self {
        Self::from(deck.collect::<Vec<Card>>())
    }
}

impl Iterator for HoleIterator {
    type Item = Hole;
    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.cards.len() {
            None
        } else {
            let hole = Hole::from((self.cards[self.i], self.cards[self.j]));
            self.j += 1;
            if self.j == self.cards.len() {
                self.i += 1;
                self.j = self.i + 1;
            }
            Some(hole)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}
