/// A hand's rank category, ascending.
///
/// Comparisons are strict category comparisons only; there is no kicker
/// model, so two HighCard holes never beat each other. The multiplicity
/// categories (OnePair through FourOAK, FullHouse) are unreachable from a
/// two-card classifier that never counts values, but the enum stays closed
/// so the total order is well-defined.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Ranking {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    Straight,
    Flush,
    FullHouse,
    FourOAK,
    StraightFlush,
    RoyalFlush,
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
            Ranking::RoyalFlush => write!(f, "RoyalFlush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        assert!(Ranking::HighCard < Ranking::Straight);
        assert!(Ranking::Straight < Ranking::Flush);
        assert!(Ranking::Flush < Ranking::StraightFlush);
        assert!(Ranking::StraightFlush < Ranking::RoyalFlush);
    }
}
