use crate::combos::mode::Mode;
use crate::evaluation::rule::Rule;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Where candidate holes are drawn from
    #[arg(long, value_enum, default_value_t = Mode::Deck)]
    pub mode: Mode,

    /// Which card order the straight check scans
    #[arg(long, value_enum, default_value_t = Rule::Dealt)]
    pub rule: Rule,

    /// Emit one JSON document per street instead of text
    #[arg(long)]
    pub json: bool,

    /// Hero hole cards for a one-shot run, e.g. "10 S 11 S"
    #[arg(long)]
    pub hole: Option<String>,

    /// Board cards for a one-shot run, e.g. "2 H 9 D 14 C"
    #[arg(long, requires = "hole")]
    pub board: Option<String>,
}
