use super::error::DealError;

/// Discriminant order is the deck's suit order: within each rank, cards
/// enumerate spades, hearts, diamonds, clubs.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
    Diamond = 2,
    Club = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Spade,
            1 => Suit::Heart,
            2 => Suit::Diamond,
            3 => Suit::Club,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char isomorphism
/// lowercase is normalized on the way in, uppercase on the way out
impl TryFrom<char> for Suit {
    type Error = DealError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spade),
            'H' => Ok(Suit::Heart),
            'D' => Ok(Suit::Diamond),
            'C' => Ok(Suit::Club),
            _ => Err(DealError::Suit(c)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "S",
                Suit::Heart => "H",
                Suit::Diamond => "D",
                Suit::Club => "C",
            }
        )
    }
}
