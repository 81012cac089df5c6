pub mod evaluator;
pub mod ranking;
pub mod rule;

pub use evaluator::Evaluator;
pub use ranking::Ranking;
pub use rule::Rule;
