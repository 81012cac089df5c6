use super::error::DealError;

#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    /// the numeric wire value, 2..=14 with Ace high
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        match n {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            12 => Rank::Ace,
            _ => panic!("invalid rank u8: {}", n),
        }
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism over numeric tokens
/// input "1" is an alias for the Ace and comes back out as "14"
impl TryFrom<&str> for Rank {
    type Error = DealError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().parse::<u8>() {
            Ok(1) | Ok(14) => Ok(Rank::Ace),
            Ok(n @ 2..=13) => Ok(Rank::from(n - 2)),
            _ => Err(DealError::Value(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        let rank = Rank::Five;
        assert!(rank == Rank::from(u8::from(rank)));
    }

    #[test]
    fn wire_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn ace_alias() {
        assert_eq!(Rank::try_from("1"), Ok(Rank::Ace));
        assert_eq!(Rank::try_from("14"), Ok(Rank::Ace));
        assert_eq!(Rank::Ace.to_string(), "14");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Rank::try_from("0").is_err());
        assert!(Rank::try_from("15").is_err());
        assert!(Rank::try_from("J").is_err());
    }
}
