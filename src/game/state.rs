use super::{card::Card, feedback::Feedback};

/// Where a game session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// A submitted guess along with its feedback, frozen at the time it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    pub card: Card,
    pub feedback: Feedback,
}

/// What a guess submission did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess was wrong, but attempts remain.
    Continue,
    Win,
    /// The final attempt was used without finding the solution.
    Loss,
    /// The text didn't name any card; nothing changed.
    Invalid,
}

/// Result of submitting a guess to an active game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// The guess added to the history, if the name was valid.
    pub appended: Option<Guess>,
    pub outcome: Outcome,
    /// The solution's name, revealed once the game is over.
    pub solution_name: Option<String>,
}

impl GuessResult {
    pub(super) fn invalid() -> Self {
        GuessResult {
            appended: None,
            outcome: Outcome::Invalid,
            solution_name: None,
        }
    }

    /// Message to show the player, if any.
    pub fn notice(&self) -> Option<String> {
        match (self.outcome, &self.solution_name) {
            (Outcome::Invalid, _) => Some("Not a valid Clash Royale card name!".to_owned()),
            (Outcome::Win, Some(name)) => Some(format!("You won! The card was {}.", name)),
            (Outcome::Loss, Some(name)) => Some(format!("Game over! The card was {}.", name)),
            _ => None,
        }
    }
}
