use super::card::Card;
use super::error::DealError;
use super::hand::Hand;

/// A two-card hand evaluated as a unit.
///
/// Unlike [`Hand`], a Hole preserves dealing order: the straight check is
/// order-sensitive, so `[5S, 6S]` and `[6S, 5S]` are different holes even
/// though they cover the same two cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
    /// the value-ascending copy used by the royal check
    pub fn sorted(&self) -> Self {
        let [a, b] = self.0;
        if b.rank() < a.rank() {
            Self([b, a])
        } else {
            Self([a, b])
        }
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self([a, b])
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        let [a, b] = hole.0;
        Hand::add(Hand::from(a), Hand::from(b))
    }
}

impl TryFrom<&[Card]> for Hole {
    type Error = DealError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match *cards {
            [a, b] if a == b => Err(DealError::Duplicate(a)),
            [a, b] => Ok(Self([a, b])),
            _ => Err(DealError::Hole(cards.len())),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = DealError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, {}", self.0[0], self.0[1])
    }
}

impl crate::Arbitrary for Hole {
    fn random() -> Self {
        use super::deck::Deck;
        Deck::new().hole()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_dealt_order() {
        let hole = Hole::try_from("6S 5S").unwrap();
        assert_eq!(hole.to_string(), "6S, 5S");
        assert_eq!(hole.sorted().to_string(), "5S, 6S");
    }

    #[test]
    fn rejects_arity() {
        assert_eq!(Hole::try_from("5S"), Err(DealError::Hole(1)));
        assert_eq!(Hole::try_from("5S 6S 7S"), Err(DealError::Hole(3)));
    }

    #[test]
    fn rejects_duplicate() {
        let five = Card::try_from("5S").unwrap();
        assert_eq!(Hole::try_from("5S 5S"), Err(DealError::Duplicate(five)));
    }
}
