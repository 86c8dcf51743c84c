use std::collections::VecDeque;

use anyhow::bail;
use broadside::{
    run_match, run_session, Autopilot, Board, Cell, Coord, InputError, Match, MatchError,
    MatchView, Orientation, Outcome, Placement, Prompt, Renderer, Report, ShipType, ShotResult,
    Side, COLS, FLEET, ROWS,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Feeds canned inputs and records everything the session shows.
#[derive(Default)]
struct Scripted {
    inputs: VecDeque<Result<Coord, InputError>>,
    rematch: VecDeque<bool>,
    frames: Vec<(Report, usize, usize)>,
    outcomes: Vec<Outcome>,
    pauses: usize,
}

impl Scripted {
    fn new(inputs: impl IntoIterator<Item = Result<Coord, InputError>>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            ..Default::default()
        }
    }

    fn reports(&self) -> Vec<Report> {
        self.frames.iter().map(|f| f.0).collect()
    }
}

impl Renderer for Scripted {
    fn request_coordinate(&mut self, _prompt: Prompt) -> anyhow::Result<Result<Coord, InputError>> {
        match self.inputs.pop_front() {
            Some(input) => Ok(input),
            None => bail!("script exhausted"),
        }
    }

    fn render(&mut self, view: &MatchView<'_>) -> anyhow::Result<()> {
        self.frames.push((view.report, view.player_hp, view.opponent_hp));
        Ok(())
    }

    fn announce_outcome(&mut self, outcome: Outcome, _player_name: &str) -> anyhow::Result<bool> {
        self.outcomes.push(outcome);
        Ok(self.rematch.pop_front().unwrap_or(false))
    }

    fn opponent_turn(&mut self) -> anyhow::Result<()> {
        self.pauses += 1;
        Ok(())
    }
}

/// Fires at every cell in row-major order, starting over each match.
#[derive(Default)]
struct Sweeper {
    next: usize,
    rematch: VecDeque<bool>,
    outcomes: Vec<Outcome>,
}

impl Renderer for Sweeper {
    fn request_coordinate(&mut self, _prompt: Prompt) -> anyhow::Result<Result<Coord, InputError>> {
        let n = self.next;
        self.next += 1;
        Ok(Ok(Coord::new(n / COLS, n % COLS)))
    }

    fn render(&mut self, _view: &MatchView<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn announce_outcome(&mut self, outcome: Outcome, _player_name: &str) -> anyhow::Result<bool> {
        self.outcomes.push(outcome);
        self.next = 0;
        Ok(self.rematch.pop_front().unwrap_or(false))
    }
}

fn cruiser_at(anchor: Coord) -> Side {
    let mut grid = Board::new();
    let cruiser = ShipType::new("Cruiser", 3);
    let cruiser = Placement::new::<ROWS, COLS>(cruiser, Orientation::Horizontal, anchor).unwrap();
    grid.place(&cruiser).unwrap();
    Side::from_truth(grid)
}

fn cruiser_duel() -> Match {
    Match::with_sides(cruiser_at(Coord::new(0, 0)), cruiser_at(Coord::new(5, 5)))
}

fn cells_where(grid: &Board, pred: impl Fn(Cell) -> bool) -> Vec<Coord> {
    grid.iter().filter(|&(_, cell)| pred(cell)).map(|(c, _)| c).collect()
}

const SINGLE_CRUISER: [ShipType; 1] = [ShipType::new("Cruiser", 3)];

#[test]
fn sinking_a_seeded_cruiser_wins_before_the_opponent_fires_again() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Match::new(&SINGLE_CRUISER, &mut rng).unwrap();
    assert_eq!((game.player().hp(), game.opponent().hp()), (3, 3));

    let targets = cells_where(game.opponent().truth(), Cell::is_ship);
    assert_eq!(targets.len(), 3);
    let last = targets[2];
    let mut renderer = Scripted::new(targets.into_iter().map(Ok));

    let summary = run_match(&mut game, &mut renderer, &mut rng, "Ann").unwrap();

    assert_eq!(summary.outcome, Outcome::PlayerWins);
    assert_eq!(summary.opponent_hp, 0);
    assert_eq!(summary.player_shots, 3);
    // the opponent fires after the first two shots only
    assert_eq!(summary.opponent_shots, 2);
    assert_eq!(renderer.pauses, 2);
    assert!(summary.player_hp >= 1);
    assert_eq!(
        renderer.reports().last(),
        Some(&Report::PlayerShot { target: last, result: ShotResult::Hit })
    );
}

#[test]
fn seeded_sea_shot_is_a_miss_and_costs_nothing() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut game = Match::new(&SINGLE_CRUISER, &mut rng).unwrap();
    let sea = cells_where(game.opponent().truth(), |c| c == Cell::Empty);
    let ships = cells_where(game.opponent().truth(), Cell::is_ship);
    assert_eq!(sea.len(), ROWS * COLS - 3);

    for &target in sea.iter().take(10) {
        assert_eq!(game.player_fire(target), Ok(ShotResult::Miss));
        assert_eq!(game.opponent().hp(), 3);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }
    assert_eq!(game.player_fire(ships[1]), Ok(ShotResult::Hit));
    assert_eq!(game.opponent().hp(), 2);
}

#[test]
fn row_sweeping_player_loses_to_the_hunting_opponent() {
    let mut losses = 0;
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Match::new(&FLEET, &mut rng).unwrap();
        let mut sweeper = Sweeper::default();
        let summary = run_match(&mut game, &mut sweeper, &mut rng, "Ann").unwrap();
        match summary.outcome {
            Outcome::OpponentWins => {
                losses += 1;
                assert_eq!(summary.player_hp, 0);
                assert!(summary.opponent_hp > 0);
                // the opponent's winning shot ends the match
                assert_eq!(summary.opponent_shots, summary.player_shots);
                assert_eq!(game.player_fire(Coord::new(0, 0)), Err(MatchError::Finished));
            }
            Outcome::PlayerWins => {
                assert_eq!(summary.opponent_hp, 0);
                assert_eq!(summary.opponent_shots + 1, summary.player_shots);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }
    assert!(losses > 0);
}

#[test]
fn rejected_input_reprompts_without_a_turn_passing() {
    let mut game = cruiser_duel();
    let mut renderer = Scripted::new([
        Err(InputError::InvalidRow),
        Err(InputError::OutOfRange),
        Ok(Coord::new(10, 0)),
        Ok(Coord::new(5, 5)),
        Ok(Coord::new(5, 5)),
        Ok(Coord::new(5, 6)),
        Ok(Coord::new(5, 7)),
    ]);
    let mut rng = SmallRng::seed_from_u64(11);

    let summary = run_match(&mut game, &mut renderer, &mut rng, "Ann").unwrap();
    assert_eq!(summary.outcome, Outcome::PlayerWins);
    assert_eq!(summary.player_shots, 3);
    assert_eq!(summary.opponent_shots, 2);

    let reports = renderer.reports();
    assert_eq!(reports.len(), 10);
    assert_eq!(
        &reports[..4],
        &[
            Report::Start,
            Report::InvalidInput,
            Report::OutOfRange,
            Report::OutOfRange,
        ]
    );
    assert!(matches!(reports[4], Report::PlayerShot { result: ShotResult::Hit, .. }));
    assert!(matches!(reports[5], Report::OpponentShot { .. }));
    assert_eq!(reports[6], Report::AlreadyTargeted(Coord::new(5, 5)));

    // rejected input never changes hit points
    for window in renderer.frames.windows(2) {
        let ((_, _, before), (report, _, after)) = (window[0], window[1]);
        let rejected = matches!(
            report,
            Report::InvalidInput | Report::OutOfRange | Report::AlreadyTargeted(_)
        );
        if rejected {
            assert_eq!(before, after);
        }
    }
}

#[test]
fn finished_match_refuses_further_shots() {
    let sunk = Side::from_truth(Board::new());
    let mut game = Match::with_sides(sunk, sunk);
    assert_eq!(game.outcome(), Outcome::Draw);

    let mut renderer = Scripted::default();
    let mut rng = SmallRng::seed_from_u64(3);
    let summary = run_match(&mut game, &mut renderer, &mut rng, "Ann").unwrap();
    assert_eq!(summary.outcome, Outcome::Draw);
    assert_eq!(renderer.reports(), vec![Report::Start]);

    assert_eq!(game.player_fire(Coord::new(0, 0)), Err(MatchError::Finished));
    assert_eq!(game.opponent_fire(&mut rng), Err(MatchError::Finished));
}

#[test]
fn closed_input_ends_the_session_with_an_error() {
    let mut game = cruiser_duel();
    let mut renderer = Scripted::new([Ok(Coord::new(9, 9))]);
    let mut rng = SmallRng::seed_from_u64(5);
    assert!(run_match(&mut game, &mut renderer, &mut rng, "Ann").is_err());
}

#[test]
fn session_replays_until_declined() {
    let mut renderer = Sweeper {
        rematch: [true, false].into_iter().collect(),
        ..Default::default()
    };
    let mut rng = SmallRng::seed_from_u64(99);
    let played = run_session(&mut renderer, &mut rng, "Ann", &FLEET).unwrap();
    assert_eq!(played, 2);
    assert_eq!(renderer.outcomes.len(), 2);
    assert!(renderer
        .outcomes
        .iter()
        .all(|o| matches!(o, Outcome::PlayerWins | Outcome::OpponentWins)));
}

#[test]
fn autopilot_finishes_its_matches() {
    let mut pilot = Autopilot::new(SmallRng::seed_from_u64(1)).with_rematches(2);
    let mut rng = SmallRng::seed_from_u64(2);
    let played = run_session(&mut pilot, &mut rng, "Autopilot", &FLEET).unwrap();
    assert_eq!(played, 3);
}
