use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// The undrawn portion of the 52-card universe.
///
/// Iteration is deterministic and falls out of the card encoding: value
/// 2 through 14 outer, suits S, H, D, C inner. Combo listings are pinned
/// to this order, so it must never change. Random selection via ::draw()
/// exists for sampling only and never touches the deterministic paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    /// draw and remove a uniformly random card from the deck
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rand::random_range(0..n);
        let card = self
            .0
            .into_iter()
            .nth(i)
            .expect("index within deck");
        self.0.remove(card);
        card
    }

    /// draw two random cards as a Hole
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

/// deterministic ascending iteration, inherited from Hand
impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size(), Some(self.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumeration_order() {
        let mut deck = Deck::new();
        assert_eq!(deck.next().unwrap().to_string(), "2S");
        assert_eq!(deck.next().unwrap().to_string(), "2H");
        assert_eq!(deck.next().unwrap().to_string(), "2D");
        assert_eq!(deck.next().unwrap().to_string(), "2C");
        assert_eq!(deck.next().unwrap().to_string(), "3S");
        assert_eq!(deck.last().unwrap().to_string(), "14C");
    }

    #[test]
    fn full_deck() {
        assert_eq!(Deck::new().size(), 52);
        assert_eq!(Deck::new().count(), 52);
    }

    #[test]
    fn random_draws_exhaust() {
        let mut deck = Deck::new();
        let drawn = (0..52).map(|_| deck.draw()).collect::<Vec<Card>>();
        assert_eq!(deck.size(), 0);
        assert_eq!(Hand::from(drawn).size(), 52);
    }
}
