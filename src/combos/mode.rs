/// Where candidate holes are drawn from.
///
/// The two strategies answer different questions and are kept as an
/// explicit choice rather than a hardcoded one:
/// - `Table` pairs each hero card with each board card, then every pair
///   of board cards, visible cards only.
/// - `Deck` pairs every two cards still in the remaining deck, which is
///   what an opponent could actually be holding.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    Table,
    #[default]
    Deck,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Deck => write!(f, "deck"),
        }
    }
}
