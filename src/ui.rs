#![cfg(feature = "std")]

//! Plain-text terminal front end, generic over its input and output so it
//! can be driven from a buffer as well as from stdin/stdout.

use std::io::{self, BufRead, Write};

use anyhow::bail;

use crate::{
    common::{Coord, InputError, ShotResult},
    config::DEFAULT_PLAYER_NAME,
    game::{MatchView, Outcome, Report},
    input::{column_letter, parse_target},
    session::{Prompt, Renderer},
};

/// Words for the last turn's report.
pub fn report_text(report: Report) -> String {
    match report {
        Report::Start => "Fleets deployed. Fire when ready.".to_string(),
        Report::PlayerShot { target, result: ShotResult::Hit } => {
            format!("Your shot at {}: it's a hit!", target)
        }
        Report::PlayerShot { target, result: ShotResult::Miss } => {
            format!("Your shot at {}: it's a miss!", target)
        }
        Report::OpponentShot { target, result: ShotResult::Hit } => {
            format!("You've been hit at {}!", target)
        }
        Report::OpponentShot { target, result: ShotResult::Miss } => {
            format!("Opponent missed at {}!", target)
        }
        Report::InvalidInput => "TARGETING ERROR!\nValue entered is invalid.".to_string(),
        Report::OutOfRange => "TARGETING ERROR!\nCoordinate entered is out of range.".to_string(),
        Report::AlreadyTargeted(c) => format!("Coordinate {} has already been targeted.", c),
    }
}

/// Write both boards, hit points and the last report.
pub fn write_view<W: Write + ?Sized>(out: &mut W, view: &MatchView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", view.player_name)?;
    writeln!(out, "Damage Points Remaining: {}", view.player_hp)?;
    writeln!(out)?;
    writeln!(out, "{}", view.player_board)?;
    writeln!(out)?;
    writeln!(out, "Opponent")?;
    writeln!(out, "Damage Points Remaining: {}", view.opponent_hp)?;
    writeln!(out)?;
    writeln!(out, "{}", view.opponent_board)?;
    writeln!(out)?;
    writeln!(out, "{}", report_text(view.report))?;
    Ok(())
}

/// Headline and message for a finished match.
pub fn outcome_text(outcome: Outcome, player_name: &str) -> (&'static str, String) {
    match outcome {
        Outcome::Draw => (
            "DRAW",
            "Mutual destruction, both fleets have been sunk!".to_string(),
        ),
        Outcome::OpponentWins => ("YOU LOSE", "Your opponent has sunk your fleet!".to_string()),
        Outcome::PlayerWins => ("YOU WIN", format!("{} has triumphed!", player_name)),
        Outcome::InProgress => ("", "The battle is still raging.".to_string()),
    }
}

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const TITLE: &str = r"
 ___   _ _____ _____ _    ___ ___ _  _ ___ ___
| _ ) /_\_   _|_   _| |  | __/ __| || |_ _| _ \
| _ \/ _ \| |   | | | |__| _|\__ \ __ || ||  _/
|___/_/ \_\_|   |_| |____|___|___/_||_|___|_|
";

const SHIP: &str = r"
                          |\
                          | \      ___
                 _________|__\____|___|____
        ________/__o__o__o__o__o__o__o__o__\_____
        \                                        /
 ~~~~~~~~\______________________________________/~~~~~~~~
";

pub struct TerminalRenderer<I, O> {
    input: I,
    output: O,
}

impl TerminalRenderer<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> TerminalRenderer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Print `prompt` and read one trimmed line; `None` once input is closed.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Clear the screen and show the title and ship art.
    pub fn welcome(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        writeln!(self.output, "{}", TITLE)?;
        writeln!(self.output, "{}", SHIP)?;
        writeln!(self.output, "Welcome to the Naval Battle Simulator.")?;
        writeln!(self.output)
    }

    /// Ask for the player's name, falling back to the default when blank.
    pub fn ask_name(&mut self) -> io::Result<String> {
        let name = self.ask("Enter your name: ")?.unwrap_or_default();
        if name.is_empty() {
            Ok(DEFAULT_PLAYER_NAME.to_string())
        } else {
            Ok(name)
        }
    }
}

impl<I: BufRead, O: Write> Renderer for TerminalRenderer<I, O> {
    fn request_coordinate(&mut self, prompt: Prompt) -> anyhow::Result<Result<Coord, InputError>> {
        let last_col = column_letter(prompt.cols.saturating_sub(1)).unwrap_or('?');
        let row = self.ask(&format!(
            "Enter target row value (0 - {}): ",
            prompt.rows.saturating_sub(1)
        ))?;
        let Some(row) = row else {
            bail!("input closed while waiting for a target row");
        };
        let col = self.ask(&format!("Enter target column value (A - {}): ", last_col))?;
        let Some(col) = col else {
            bail!("input closed while waiting for a target column");
        };
        Ok(parse_target(&row, &col))
    }

    fn render(&mut self, view: &MatchView<'_>) -> anyhow::Result<()> {
        write_view(&mut self.output, view)?;
        Ok(())
    }

    fn announce_outcome(&mut self, outcome: Outcome, player_name: &str) -> anyhow::Result<bool> {
        let (headline, message) = outcome_text(outcome, player_name);
        write!(self.output, "{}", CLEAR_SCREEN)?;
        writeln!(self.output, "*** {} ***", headline)?;
        writeln!(self.output, "{}", message)?;
        writeln!(self.output)?;
        let answer = self.ask("Enter Y to play again, or any other key to quit: ")?;
        Ok(answer.is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }

    fn opponent_turn(&mut self) -> anyhow::Result<()> {
        self.ask("Opponent's Turn (Press ENTER to continue)")?;
        Ok(())
    }
}
