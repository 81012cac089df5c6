pub mod holes;
pub mod mode;
pub mod spot;

pub use holes::HoleIterator;
pub use mode::Mode;
pub use spot::Spot;
