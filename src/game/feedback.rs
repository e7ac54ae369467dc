use std::cmp::Ordering;

use super::card::Card;

/// Whether the guessed card's elixir cost equals the solution's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElixirStatus {
    Correct,
    Incorrect,
}

/// Which way the solution's elixir cost lies from the guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElixirDirection {
    /// The solution costs more.
    Up,
    /// The solution costs less.
    Down,
    None,
}

/// Per-attribute comparison of a guessed card against the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub name_match: bool,
    pub elixir_status: ElixirStatus,
    pub elixir_direction: ElixirDirection,
    pub type_match: bool,
}

impl Feedback {
    /// Compare `guess` to `solution`.
    pub fn evaluate(guess: &Card, solution: &Card) -> Self {
        let (elixir_status, elixir_direction) = match guess.elixir_cost.cmp(&solution.elixir_cost)
        {
            Ordering::Less => (ElixirStatus::Incorrect, ElixirDirection::Up),
            Ordering::Greater => (ElixirStatus::Incorrect, ElixirDirection::Down),
            Ordering::Equal => (ElixirStatus::Correct, ElixirDirection::None),
        };
        Feedback {
            name_match: guess.normalized_name() == solution.normalized_name(),
            elixir_status,
            elixir_direction,
            type_match: guess.card_type == solution.card_type,
        }
    }
}
