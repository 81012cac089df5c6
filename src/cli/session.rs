use super::args::Args;
use super::render::Render;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::combos::mode::Mode;
use crate::combos::spot::Spot;
use crate::evaluation::rule::Rule;
use dialoguer::Input;

/// Walks the three reveal streets, rebuilding the spot from scratch after
/// each one. Nothing is memoized between streets; every render is an
/// independent query against the core.
pub struct Session {
    mode: Mode,
    rule: Rule,
    json: bool,
    once: Option<(String, String)>,
}

impl From<Args> for Session {
    fn from(args: Args) -> Self {
        Self {
            mode: args.mode,
            rule: args.rule,
            json: args.json,
            once: args.hole.map(|h| (h, args.board.unwrap_or_default())),
        }
    }
}

impl Session {
    pub fn run(self) -> anyhow::Result<()> {
        match self.once {
            Some(ref query) => self.oneshot(query.clone()),
            None => self.walk(),
        }
    }

    /// non-interactive: one spot from the command line, one render.
    /// the core takes any board of five or fewer cards, but rendering is
    /// per-street, so a board that is no street is rejected up front.
    fn oneshot(&self, (hole, board): (String, String)) -> anyhow::Result<()> {
        let hero = Hole::try_from(hole.as_str())?;
        let board = Board::try_from(board.as_str())?;
        let street = Street::try_from(&board)?;
        let spot = Spot::try_from((hero, board))?;
        log::info!("{}: {} {}", street, hero, spot.board());
        self.render(&spot);
        Ok(())
    }

    /// interactive: hole, then flop, turn, river, rendering after each
    fn walk(&self) -> anyhow::Result<()> {
        let hero = self.hole()?;
        log::info!("hole: {}", hero);
        let mut cards = Vec::new();
        let mut street = Street::Pref;
        while street != Street::Rive {
            let spot = self.reveal(hero, &mut cards, street)?;
            street = street.next();
            log::info!("{}: {}", street, spot.board());
            self.render(&spot);
        }
        Ok(())
    }

    /// prompt for the next street's cards until they make a valid spot.
    /// duplicates are caught at spot construction and re-asked, so a card
    /// claimed twice never silently shrinks the deck.
    fn reveal(
        &self,
        hero: Hole,
        cards: &mut Vec<Card>,
        street: Street,
    ) -> anyhow::Result<Spot> {
        loop {
            let n = street.n_revealed();
            let reveal = self.cards(
                match street {
                    Street::Pref => format!("enter the {} flop cards", n),
                    _ => format!("enter the {} card", street.next()),
                },
                n,
            )?;
            let mut board = cards.clone();
            board.extend(reveal.iter().copied());
            match Board::try_from(board).and_then(|b| Spot::try_from((hero, b))) {
                Ok(spot) => {
                    cards.extend(reveal);
                    break Ok(spot);
                }
                Err(e) => {
                    log::error!("{}", e);
                    continue;
                }
            }
        }
    }

    fn hole(&self) -> anyhow::Result<Hole> {
        let input: String = Input::new()
            .with_prompt("enter your 2 hole cards (e.g. 10 S 11 S)")
            .validate_with(|s: &String| {
                Hole::try_from(s.as_str()).map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(Hole::try_from(input.as_str()).expect("validated"))
    }

    fn cards(&self, prompt: String, n: usize) -> anyhow::Result<Vec<Card>> {
        let input: String = Input::new()
            .with_prompt(prompt)
            .validate_with(|s: &String| match Card::parse(s.as_str()) {
                Ok(cards) if cards.len() == n => Ok(()),
                Ok(cards) => Err(format!("expected {} cards, got {}", n, cards.len())),
                Err(e) => Err(e.to_string()),
            })
            .interact_text()?;
        Ok(Card::parse(input.as_str()).expect("validated"))
    }

    fn render(&self, spot: &Spot) {
        let beats = spot.beats(self.mode, self.rule);
        match self.json {
            true => Render::json(spot, &beats, self.rule),
            false => Render::text(spot, &beats, self.rule),
        }
    }
}
