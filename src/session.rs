//! Turn orchestration for a match and the replay loop around it.
//!
//! The core never reads input or prints anything itself: a [`Renderer`]
//! supplies the player's coordinates and shows [`MatchView`] snapshots.

use anyhow::anyhow;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::{Coord, InputError, MatchError, ShotError},
    config::{COLS, ROWS},
    game::{Match, MatchSummary, MatchView, Outcome, Report},
    ship::ShipType,
};

/// Bounds shown to the player when asking for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    pub rows: usize,
    pub cols: usize,
}

/// Presentation and input collaborator.
///
/// Errors returned from these methods are environment failures and end the
/// session; bad player input is reported through the inner `InputError`.
pub trait Renderer {
    /// Ask the player for the next target.
    fn request_coordinate(&mut self, prompt: Prompt) -> anyhow::Result<Result<Coord, InputError>>;

    /// Show the current state of the match.
    fn render(&mut self, view: &MatchView<'_>) -> anyhow::Result<()>;

    /// Show the final outcome; returns whether to start another match.
    fn announce_outcome(&mut self, outcome: Outcome, player_name: &str) -> anyhow::Result<bool>;

    /// Called between the player's shot and the opponent's.
    fn opponent_turn(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Keep asking until one player shot resolves. Rejected input leaves the
/// match untouched and is shown before asking again.
fn player_turn<R: Renderer + ?Sized>(
    game: &mut Match,
    renderer: &mut R,
    player_name: &str,
) -> anyhow::Result<Report> {
    let prompt = Prompt { rows: ROWS, cols: COLS };
    loop {
        let rejected = match renderer.request_coordinate(prompt)? {
            Err(InputError::OutOfRange) => Report::OutOfRange,
            Err(_) => Report::InvalidInput,
            Ok(target) => match game.player_fire(target) {
                Ok(result) => return Ok(Report::PlayerShot { target, result }),
                Err(MatchError::Shot(ShotError::OutOfRange { .. })) => Report::OutOfRange,
                Err(MatchError::Shot(ShotError::AlreadyTargeted(c))) => Report::AlreadyTargeted(c),
                Err(e) => return Err(anyhow!(e)),
            },
        };
        debug!("player target rejected: {:?}", rejected);
        renderer.render(&game.view(player_name, rejected))?;
    }
}

/// Play `game` to completion. The outcome is re-checked after every resolved
/// shot, so a side whose fleet is sunk never fires again.
pub fn run_match<R: Renderer + ?Sized, G: Rng + ?Sized>(
    game: &mut Match,
    renderer: &mut R,
    rng: &mut G,
    player_name: &str,
) -> anyhow::Result<MatchSummary> {
    let mut report = Report::Start;
    while !game.outcome().is_over() {
        renderer.render(&game.view(player_name, report))?;
        report = player_turn(game, renderer, player_name)?;
        if game.outcome().is_over() {
            break;
        }
        renderer.render(&game.view(player_name, report))?;
        renderer.opponent_turn()?;
        let (target, result) = game.opponent_fire(rng).map_err(|e| anyhow!(e))?;
        report = Report::OpponentShot { target, result };
    }
    renderer.render(&game.view(player_name, report))?;
    Ok(game.summary())
}

/// Deploy fresh fleets and play one match.
pub fn play_match<R: Renderer + ?Sized, G: Rng + ?Sized>(
    renderer: &mut R,
    rng: &mut G,
    player_name: &str,
    fleet: &[ShipType],
) -> anyhow::Result<MatchSummary> {
    let mut game = Match::new(fleet, rng).map_err(|e| anyhow!(e))?;
    run_match(&mut game, renderer, rng, player_name)
}

/// Play matches until the renderer declines a rematch. Returns the number
/// of matches played.
pub fn run_session<R: Renderer + ?Sized, G: Rng + ?Sized>(
    renderer: &mut R,
    rng: &mut G,
    player_name: &str,
    fleet: &[ShipType],
) -> anyhow::Result<usize> {
    let mut played = 0;
    loop {
        let summary = play_match(renderer, rng, player_name, fleet)?;
        played += 1;
        info!("match {} finished: {:?}", played, summary);
        if !renderer.announce_outcome(summary.outcome, player_name)? {
            return Ok(played);
        }
    }
}
