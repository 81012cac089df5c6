pub mod board;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod hole;
pub mod rank;
pub mod street;
pub mod suit;

pub use board::Board;
pub use card::Card;
pub use deck::Deck;
pub use error::DealError;
pub use hand::Hand;
pub use hole::Hole;
pub use rank::Rank;
pub use street::Street;
pub use suit::Suit;
