use super::error::DealError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. The natural ordering therefore sorts by value
/// ascending, then spades, hearts, diamonds, clubs within each value.
/// That ordering is the deck's enumeration order and every downstream
/// combo listing inherits it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }

    /// Parses a whitespace- or comma-separated list of card tokens.
    ///
    /// Each card is a numeric value followed by a suit letter. The suit
    /// may be fused to the value ("10S") or stand alone ("10 S"); both
    /// spellings come from the same wire format.
    pub fn parse(s: &str) -> Result<Vec<Self>, DealError> {
        let mut cards = Vec::new();
        let mut tokens = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        while let Some(token) = tokens.next() {
            if token.chars().all(|c| c.is_ascii_digit()) {
                let suit = tokens.next().ok_or(DealError::Token(token.to_string()))?;
                let mut fused = String::from(token);
                fused.push_str(suit);
                cards.push(Self::try_from(fused.as_str())?);
            } else {
                cards.push(Self::try_from(token)?);
            }
        }
        Ok(cards)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism for a single token, e.g. "13S" or "10 S"
impl TryFrom<&str> for Card {
    type Error = DealError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let token = s.trim();
        let split = token
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .ok_or(DealError::Token(token.to_string()))?;
        let (value, suit) = token.split_at(split);
        let rank = Rank::try_from(value)?;
        let suit = match suit.trim().chars().collect::<Vec<char>>().as_slice() {
            [c] => Suit::try_from(*c)?,
            _ => return Err(DealError::Token(token.to_string())),
        };
        Ok(Card::from((rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        Self(rand::random_range(0..52))
    }
}
