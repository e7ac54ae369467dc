use log::{debug, info, trace};
use rand::{thread_rng, Rng};
use thiserror::Error;

pub use card::{Card, CardType};
pub use data::{Catalog, CatalogError};
pub use feedback::{ElixirDirection, ElixirStatus, Feedback};
pub use state::{GameStatus, Guess, GuessResult, Outcome};

pub mod card;
pub mod data;
pub mod feedback;
mod state;
#[cfg(test)]
mod tests;

/// Number of guesses the player gets before the game is lost.
pub const MAX_ATTEMPTS: usize = 6;

/// Failure modes for a guess.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("{0:?} is not a known card name")]
    InvalidCardName(String),
}

/// A single session of the game.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards that can be guessed or be the solution.
    catalog: Catalog,
    /// The card the player is trying to identify.
    solution: Card,
    /// Guesses so far, in the order they were made.
    history: Vec<Guess>,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Start a new game with the standard catalog and a random solution.
    pub fn new() -> Self {
        Game::with_catalog(Catalog::standard())
    }

    /// Start a new game with a random solution from the given catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let solution = catalog.choose(&mut thread_rng()).clone();
        Game::from_parts(catalog, solution)
    }

    /// Start a new game with a fixed solution, which must be in the catalog.
    #[cfg(test)]
    pub fn with_solution(catalog: Catalog, solution: &str) -> Result<Self, GuessError> {
        let solution = catalog.find(solution)?.clone();
        Ok(Game::from_parts(catalog, solution))
    }

    fn from_parts(catalog: Catalog, solution: Card) -> Self {
        info!("New game started with {} cards", catalog.len());
        trace!("Solution is {:?}", solution.name);
        Game {
            catalog,
            solution,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Throw away the current session and start a fresh one with a new random solution.
    pub fn start_new_game(&mut self) {
        self.start_new_game_with(&mut thread_rng());
    }

    /// As `start_new_game`, drawing the solution from `rng`.
    pub fn start_new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let solution = self.catalog.choose(rng).clone();
        *self = Game::from_parts(self.catalog.clone(), solution);
    }

    /// Submit the player's raw text as a guess.
    ///
    /// Returns `None` without touching the game if it is already over. Text which doesn't
    /// name a card in the catalog produces an `Outcome::Invalid` result and doesn't use up
    /// an attempt.
    pub fn submit_guess(&mut self, raw: &str) -> Option<GuessResult> {
        if self.is_over() {
            debug!("Ignoring guess {:?}, game is over", raw);
            return None;
        }

        let card = match self.catalog.find(raw) {
            Ok(card) => card.clone(),
            Err(e) => {
                debug!("Rejected guess: {}", e);
                return Some(GuessResult::invalid());
            }
        };

        let feedback = Feedback::evaluate(&card, &self.solution);
        debug!("Guess {:?} got {:?}", card.name, feedback);
        let guess = Guess { card, feedback };
        self.history.push(guess.clone());

        // A match on the final attempt still wins
        let outcome = if feedback.name_match {
            self.status = GameStatus::Won;
            Outcome::Win
        } else if self.history.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
            Outcome::Loss
        } else {
            Outcome::Continue
        };
        if self.is_over() {
            info!("Game {:?} after {} guesses", self.status, self.history.len());
        }

        Some(GuessResult {
            appended: Some(guess),
            outcome,
            solution_name: self.is_over().then(|| self.solution.name.clone()),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn history(&self) -> &[Guess] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.history.len()
    }

    /// The solution, only available once the game is over.
    pub fn revealed_solution(&self) -> Option<&Card> {
        self.is_over().then_some(&self.solution)
    }

    #[cfg(test)]
    pub(crate) fn solution(&self) -> &Card {
        &self.solution
    }
}
