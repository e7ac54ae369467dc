use log::info;
use rand::{rngs::StdRng, SeedableRng};

use super::{Driver, DriverError};
use crate::{
    game::{Game, Outcome},
    solver::Solver,
};

/// A driver for direct interaction with an instance of `Game`, played by a `Solver`.
#[derive(Debug)]
pub struct DirectDriver {
    /// The game itself.
    game: Game,
    /// The solver which will attempt to play the game.
    solver: Solver,
    rng: StdRng,
}

impl DirectDriver {
    pub fn new(game: Game) -> Self {
        DirectDriver::with_rng(game, StdRng::from_entropy())
    }

    pub fn with_rng(game: Game, rng: StdRng) -> Self {
        let solver = Solver::new(game.catalog());
        DirectDriver { game, solver, rng }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}

impl Driver for DirectDriver {
    fn play(&mut self) -> Result<(), DriverError> {
        while !self.game.is_over() {
            let card = self
                .solver
                .next_guess(&mut self.rng)
                .ok_or(DriverError::NoCandidates)?
                .clone();
            info!(
                "Guessing {:?}, {} candidates left",
                card.name,
                self.solver.candidates.len()
            );

            let Some(result) = self.game.submit_guess(&card.name) else {
                break;
            };
            if let Some(guess) = &result.appended {
                self.solver.update(guess);
            }
            match result.outcome {
                Outcome::Win => {
                    info!("Game complete!");
                    return Ok(());
                }
                Outcome::Loss => return Err(DriverError::GameOver),
                Outcome::Continue | Outcome::Invalid => {}
            }
        }
        Err(DriverError::GameOver)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::DirectDriver;
    use crate::{
        driver::{Driver, DriverError},
        game::{Card, CardType, Catalog, Game, GameStatus, MAX_ATTEMPTS},
    };

    #[test]
    fn solves_small_catalog() {
        let catalog = Catalog::new(vec![
            Card::new("KNIGHT", 3, CardType::Troop),
            Card::new("GIANT", 5, CardType::Troop),
            Card::new("LOG", 2, CardType::Spell),
        ])
        .unwrap();
        for solution in ["KNIGHT", "GIANT", "LOG"] {
            for seed in 0..10 {
                let game = Game::with_solution(catalog.clone(), solution).unwrap();
                let mut driver = DirectDriver::with_rng(game, StdRng::seed_from_u64(seed));
                driver.play().unwrap();
                assert_eq!(driver.game().status(), GameStatus::Won);
                assert!(driver.game().history().len() <= 3);
            }
        }
    }

    #[test]
    fn plays_standard_game_to_the_end() {
        for seed in 0..50 {
            let mut driver = DirectDriver::with_rng(Game::new(), StdRng::seed_from_u64(seed));
            match driver.play() {
                Ok(()) => assert_eq!(driver.game().status(), GameStatus::Won),
                Err(DriverError::GameOver) => {
                    assert_eq!(driver.game().status(), GameStatus::Lost);
                    assert_eq!(driver.game().history().len(), MAX_ATTEMPTS);
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }
    }
}
