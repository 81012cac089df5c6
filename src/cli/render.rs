use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::combos::spot::Spot;
use crate::evaluation::rule::Rule;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// One street's worth of results on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStreet {
    pub street: String,
    pub hero: String,
    pub ranking: String,
    pub count: usize,
    pub combos: Vec<String>,
}

impl From<(&Spot, &[Hole], Rule)> for ApiStreet {
    fn from((spot, beats, rule): (&Spot, &[Hole], Rule)) -> Self {
        Self {
            street: spot.street().to_string(),
            hero: spot.hero().to_string(),
            ranking: spot.ranking(rule).to_string(),
            count: beats.len(),
            combos: beats.iter().map(Hole::to_string).collect(),
        }
    }
}

/// Textual listing of the combos that beat the hero, one line per hole.
pub struct Render;

impl Render {
    pub fn text(spot: &Spot, beats: &[Hole], rule: Rule) {
        println!(
            "Hands that beat your hand after the {} ({} {}):",
            spot.street(),
            spot.hero(),
            spot.ranking(rule)
        );
        for hole in beats {
            let [a, b] = hole.cards();
            println!("Hand: {}, {}", Self::paint(a), Self::paint(b));
        }
        println!("{} combos", beats.len());
    }

    pub fn json(spot: &Spot, beats: &[Hole], rule: Rule) {
        let dto = ApiStreet::from((spot, beats, rule));
        println!(
            "{}",
            serde_json::to_string_pretty(&dto).expect("string-only dto")
        );
    }

    fn paint(card: &Card) -> colored::ColoredString {
        use crate::cards::suit::Suit;
        match card.suit() {
            Suit::Heart | Suit::Diamond => card.to_string().red(),
            Suit::Spade | Suit::Club => card.to_string().normal(),
        }
    }
}
