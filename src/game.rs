use log::{debug, info};
use rand::Rng;

use crate::{
    ai::Targeting,
    common::{Coord, MatchError, PlacementError, ShotError, ShotResult},
    config::{fleet_hit_points, COLS, ROWS},
    grid::Board,
    placement::place_fleet,
    ship::ShipType,
    shot,
};

/// Outcome of a match, derived from both sides' hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    PlayerWins,
    OpponentWins,
    Draw,
}

impl Outcome {
    /// Both fleets sunk is a draw; otherwise the side left standing wins.
    pub fn from_hit_points(player_hp: usize, opponent_hp: usize) -> Self {
        match (player_hp, opponent_hp) {
            (0, 0) => Outcome::Draw,
            (0, _) => Outcome::OpponentWins,
            (_, 0) => Outcome::PlayerWins,
            _ => Outcome::InProgress,
        }
    }

    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// One side's fleet: its truth grid, the grid shown to the other side, and
/// its remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    truth: Board,
    display: Board,
    hp: usize,
}

impl Side {
    /// Lay out `fleet` at random.
    pub fn deploy<G: Rng + ?Sized>(
        fleet: &[ShipType],
        rng: &mut G,
    ) -> Result<Self, PlacementError> {
        let truth = place_fleet::<ROWS, COLS, _>(fleet, rng)?;
        Ok(Self::from_truth(truth))
    }

    /// Wrap an already populated truth grid; hit points are its ship cells.
    pub fn from_truth(truth: Board) -> Self {
        let hp = truth.tally().ships;
        Self {
            truth,
            display: Board::new(),
            hp,
        }
    }

    pub fn truth(&self) -> &Board {
        &self.truth
    }

    pub fn display(&self) -> &Board {
        &self.display
    }

    pub fn hp(&self) -> usize {
        self.hp
    }

    /// Resolve an incoming shot; a hit costs exactly one hit point.
    pub fn receive_fire(&mut self, coord: Coord) -> Result<ShotResult, ShotError> {
        let result = shot::resolve(&mut self.truth, &mut self.display, coord)?;
        if result == ShotResult::Hit {
            self.hp = self.hp.saturating_sub(1);
        }
        Ok(result)
    }
}

/// What happened on the last turn, for renderers to put into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Fresh match, nothing fired yet.
    Start,
    /// The player's shot resolved.
    PlayerShot { target: Coord, result: ShotResult },
    /// The opponent's shot resolved.
    OpponentShot { target: Coord, result: ShotResult },
    /// Player input could not be parsed.
    InvalidInput,
    /// Player aimed off the grid.
    OutOfRange,
    /// Player aimed at a cell already hit or missed.
    AlreadyTargeted(Coord),
}

/// Read-only snapshot handed to renderers. The opponent is only ever shown
/// through its display grid.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    pub player_name: &'a str,
    pub player_hp: usize,
    pub opponent_hp: usize,
    /// The player's own fleet, ships visible.
    pub player_board: &'a Board,
    /// What the player knows of the opponent's fleet.
    pub opponent_board: &'a Board,
    pub report: Report,
}

/// End-of-match figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub outcome: Outcome,
    pub player_hp: usize,
    pub opponent_hp: usize,
    pub player_shots: usize,
    pub opponent_shots: usize,
}

/// A single match: both sides, the opponent's targeting memory, and the
/// derived outcome.
#[derive(Debug, Clone)]
pub struct Match {
    player: Side,
    opponent: Side,
    targeting: Targeting,
    outcome: Outcome,
    player_shots: usize,
    opponent_shots: usize,
}

impl Match {
    /// Deploy `fleet` for both sides.
    pub fn new<G: Rng + ?Sized>(fleet: &[ShipType], rng: &mut G) -> Result<Self, PlacementError> {
        let player = Side::deploy(fleet, rng)?;
        let opponent = Side::deploy(fleet, rng)?;
        info!(
            "new match: {} ships, {} hit points per side",
            fleet.len(),
            fleet_hit_points(fleet)
        );
        Ok(Self::with_sides(player, opponent))
    }

    /// Start from fixed sides.
    pub fn with_sides(player: Side, opponent: Side) -> Self {
        Self {
            outcome: Outcome::from_hit_points(player.hp(), opponent.hp()),
            player,
            opponent,
            targeting: Targeting::new(),
            player_shots: 0,
            opponent_shots: 0,
        }
    }

    pub fn player(&self) -> &Side {
        &self.player
    }

    pub fn opponent(&self) -> &Side {
        &self.opponent
    }

    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    fn ensure_running(&self) -> Result<(), MatchError> {
        if self.outcome.is_over() {
            Err(MatchError::Finished)
        } else {
            Ok(())
        }
    }

    fn recompute(&mut self) {
        self.outcome = Outcome::from_hit_points(self.player.hp(), self.opponent.hp());
        if self.outcome.is_over() {
            info!(
                "match over: {:?} after {} player / {} opponent shots",
                self.outcome, self.player_shots, self.opponent_shots
            );
        }
    }

    /// Resolve the player's shot at the opponent's fleet.
    pub fn player_fire(&mut self, target: Coord) -> Result<ShotResult, MatchError> {
        self.ensure_running()?;
        let result = self.opponent.receive_fire(target)?;
        self.player_shots += 1;
        self.recompute();
        Ok(result)
    }

    /// Let the opponent pick a target and resolve it against the player's
    /// fleet.
    pub fn opponent_fire<G: Rng + ?Sized>(
        &mut self,
        rng: &mut G,
    ) -> Result<(Coord, ShotResult), MatchError> {
        self.ensure_running()?;
        let target = self
            .targeting
            .select_target(rng)
            .ok_or(MatchError::TargetsExhausted)?;
        let result = self.player.receive_fire(target)?;
        let was = self.targeting.mode();
        self.targeting.record_result(target, result);
        if was != self.targeting.mode() {
            debug!("opponent switches to {:?}", self.targeting.mode());
        }
        self.opponent_shots += 1;
        self.recompute();
        Ok((target, result))
    }

    pub fn view<'a>(&'a self, player_name: &'a str, report: Report) -> MatchView<'a> {
        MatchView {
            player_name,
            player_hp: self.player.hp(),
            opponent_hp: self.opponent.hp(),
            player_board: self.player.truth(),
            opponent_board: self.opponent.display(),
            report,
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            outcome: self.outcome,
            player_hp: self.player.hp(),
            opponent_hp: self.opponent.hp(),
            player_shots: self.player_shots,
            opponent_shots: self.opponent_shots,
        }
    }
}
