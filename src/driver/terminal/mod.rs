use log::{debug, info};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};
use strum::EnumString;

use super::{Driver, DriverError};
use crate::game::Game;
use helpers::render_grid;

mod helpers;

const TITLE: &str = "Clash Royale Wordle";

/// Commands the player can type instead of a card name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Command {
    #[strum(serialize = ":new")]
    NewGame,
    #[strum(serialize = ":quit")]
    Quit,
}

/// A driver which lets a person play the game over a text stream, e.g. stdin and stdout.
#[derive(Debug)]
pub struct TerminalDriver<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalDriver<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        TerminalDriver {
            game,
            input,
            output,
        }
    }

    fn prompt(&mut self) -> Result<(), DriverError> {
        write!(
            self.output,
            "Enter card name... ({} left) > ",
            self.game.attempts_remaining()
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn game_over_hint(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "Type :new for a new game or :quit to exit.")?;
        Ok(())
    }

    fn new_game(&mut self) -> Result<(), DriverError> {
        self.game.start_new_game();
        writeln!(self.output, "New game! Guess the card.")?;
        self.prompt()
    }

    fn guess(&mut self, text: &str) -> Result<(), DriverError> {
        let Some(result) = self.game.submit_guess(text) else {
            if let Some(solution) = self.game.revealed_solution() {
                writeln!(
                    self.output,
                    "This game is over, the card was {}.",
                    solution.name
                )?;
            }
            return self.game_over_hint();
        };

        if result.appended.is_some() {
            writeln!(self.output, "{}", render_grid(self.game.history()))?;
        }
        if let Some(notice) = result.notice() {
            writeln!(self.output, "{}", notice)?;
        }
        if self.game.is_over() {
            self.game_over_hint()
        } else {
            self.prompt()
        }
    }
}

impl<R: BufRead, W: Write> Driver for TerminalDriver<R, W> {
    fn play(&mut self) -> Result<(), DriverError> {
        writeln!(self.output, "{}", TITLE)?;
        self.prompt()?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            // Bytes which aren't UTF-8 can't name a card, so they become an invalid guess
            let line = String::from_utf8_lossy(&buf).into_owned();
            let text = line
                .strip_suffix('\n')
                .map(|l| l.strip_suffix('\r').unwrap_or(l))
                .unwrap_or(line.as_str());

            match Command::from_str(text) {
                Ok(Command::Quit) => break,
                Ok(Command::NewGame) => self.new_game()?,
                Err(_) => self.guess(text)?,
            }
        }

        info!(
            "Leaving with game {:?} after {} guesses",
            self.game.status(),
            self.game.history().len()
        );
        writeln!(self.output)?;
        Ok(())
    }
}
