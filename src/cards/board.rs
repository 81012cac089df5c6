use super::card::Card;
use super::error::DealError;

/// The community cards revealed so far, in reveal order.
///
/// A dumb container: duplicate checks against the hero's hole happen at
/// spot construction, where the full picture is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(5),
        }
    }
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<Vec<Card>> for Board {
    type Error = DealError;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            0..=5 => Ok(Self { cards }),
            n => Err(DealError::Board(n)),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = DealError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}  ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_street_by_street() {
        let mut board = Board::try_from("5H 6D 7C").unwrap();
        assert_eq!(board.size(), 3);
        board.push(Card::try_from("8S").unwrap());
        assert_eq!(board.size(), 4);
    }

    #[test]
    fn rejects_overfull() {
        assert_eq!(
            Board::try_from("2S 3S 4S 5S 6S 7S"),
            Err(DealError::Board(6))
        );
    }
}
