use super::card::Card;

/// Everything that can go wrong between raw input and a validated spot.
///
/// Parse failures are caught at the token level; structural failures
/// (arity, duplicates) are caught when cards are assembled into holes,
/// boards, and spots. The core never sees a malformed card.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DealError {
    #[error("unrecognized card token: {0:?}")]
    Token(String),
    #[error("card value out of range: {0:?}")]
    Value(String),
    #[error("unrecognized suit: {0:?}")]
    Suit(char),
    #[error("a hole takes exactly 2 cards, got {0}")]
    Hole(usize),
    #[error("a board takes at most 5 cards, got {0}")]
    Board(usize),
    #[error("no street has {0} community cards")]
    Street(usize),
    #[error("duplicate card: {0}")]
    Duplicate(Card),
}
