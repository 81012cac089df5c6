/// Which card order the straight check scans.
///
/// The straight check has always scanned the hole in dealt order, so
/// `[5S, 6S]` is a straight flush while `[6S, 5S]` is only a flush.
/// `Dealt` keeps that behavior; `Sorted` scans the value-ascending copy
/// instead, making classification order-insensitive. A runtime value
/// rather than a compile-time switch so both can be tested side by side.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Rule {
    #[default]
    Dealt,
    Sorted,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Dealt => write!(f, "dealt"),
            Self::Sorted => write!(f, "sorted"),
        }
    }
}
