#![cfg(feature = "std")]

//! A renderer that plays the human side by itself, using the same hunt/search
//! heuristic as the computer opponent.

use std::boxed::Box;
use std::io::Write;

use anyhow::anyhow;
use rand::rngs::SmallRng;

use crate::{
    ai::Targeting,
    common::{Coord, InputError, ShotResult},
    game::{MatchView, Outcome},
    grid::Cell,
    session::{Prompt, Renderer},
    ui::{outcome_text, write_view},
};

pub struct Autopilot {
    rng: SmallRng,
    targeting: Targeting,
    pending: Option<Coord>,
    rematches: usize,
    echo: Option<Box<dyn Write>>,
}

impl Autopilot {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            targeting: Targeting::new(),
            pending: None,
            rematches: 0,
            echo: None,
        }
    }

    /// Print every rendered view to `out`.
    pub fn echo_to(mut self, out: impl Write + 'static) -> Self {
        self.echo = Some(Box::new(out));
        self
    }

    /// Accept this many rematches before declining.
    pub fn with_rematches(mut self, rematches: usize) -> Self {
        self.rematches = rematches;
        self
    }
}

impl Renderer for Autopilot {
    fn request_coordinate(&mut self, _prompt: Prompt) -> anyhow::Result<Result<Coord, InputError>> {
        let target = self
            .targeting
            .select_target(&mut self.rng)
            .ok_or_else(|| anyhow!("autopilot has no cells left to target"))?;
        self.pending = Some(target);
        Ok(Ok(target))
    }

    fn render(&mut self, view: &MatchView<'_>) -> anyhow::Result<()> {
        // learn the result of our last shot from the opponent's display grid
        if let Some(target) = self.pending.take() {
            let result = match view.opponent_board.get(target) {
                Some(Cell::Hit) => ShotResult::Hit,
                _ => ShotResult::Miss,
            };
            self.targeting.record_result(target, result);
        }
        if let Some(out) = self.echo.as_mut() {
            write_view(out.as_mut(), view)?;
        }
        Ok(())
    }

    fn announce_outcome(&mut self, outcome: Outcome, player_name: &str) -> anyhow::Result<bool> {
        if let Some(out) = self.echo.as_mut() {
            let (headline, message) = outcome_text(outcome, player_name);
            writeln!(out, "\n*** {} ***\n{}", headline, message)?;
        }
        self.targeting = Targeting::new();
        self.pending = None;
        if self.rematches == 0 {
            return Ok(false);
        }
        self.rematches -= 1;
        Ok(true)
    }
}
