use driver::{direct::DirectDriver, terminal::TerminalDriver, Driver, DriverError};
use game::Game;
use log::info;
use std::str::FromStr;
use strum::EnumString;

mod driver;
mod game;
mod solver;

/// How the game should be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Mode {
    /// A person plays in the terminal.
    #[default]
    Play,
    /// The solver plays by itself.
    Bot,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init().unwrap_or(());

    let mode = match std::env::args().nth(1) {
        Some(arg) => Mode::from_str(&arg)?,
        None => Mode::default(),
    };
    info!("Starting in {:?} mode", mode);

    match mode {
        Mode::Play => {
            let stdin = std::io::stdin();
            let mut driver = TerminalDriver::new(Game::new(), stdin.lock(), std::io::stdout());
            driver.play()?;
        }
        Mode::Bot => loop {
            let mut driver = DirectDriver::new(Game::new());
            match driver.play() {
                Ok(()) => {
                    println!(
                        "Solved in {} guesses: {}",
                        driver.game().history().len(),
                        driver
                            .game()
                            .history()
                            .iter()
                            .map(|guess| guess.card.name.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    break;
                }
                Err(DriverError::GameOver) => {
                    // Try again
                    info!("Game over, playing again...");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        },
    }

    Ok(())
}
