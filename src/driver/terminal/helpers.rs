use crate::game::{ElixirDirection, ElixirStatus, Guess};

const NAME_WIDTH: usize = 18;
const COLUMN_WIDTH: usize = 10;

/// Mark a cell as matching the solution or not.
fn marker(correct: bool) -> char {
    if correct {
        '✓'
    } else {
        '✗'
    }
}

fn arrow(direction: ElixirDirection) -> &'static str {
    match direction {
        ElixirDirection::Up => " ↑",
        ElixirDirection::Down => " ↓",
        ElixirDirection::None => "",
    }
}

/// The column headings of the guess grid.
pub fn render_header() -> String {
    format!(
        "{:<name$} | {:^col$} | {:^col$}",
        "Card Name",
        "Elixir",
        "Type",
        name = NAME_WIDTH,
        col = COLUMN_WIDTH
    )
}

/// A single row of the guess grid.
pub fn render_guess(guess: &Guess) -> String {
    let feedback = &guess.feedback;
    let elixir = format!(
        "{} {}{}",
        guess.card.elixir_cost,
        marker(feedback.elixir_status == ElixirStatus::Correct),
        arrow(feedback.elixir_direction)
    );
    let card_type = format!("{} {}", guess.card.card_type, marker(feedback.type_match));
    format!(
        "{:<name$} | {:^col$} | {:^col$}",
        guess.card.name,
        elixir,
        card_type,
        name = NAME_WIDTH,
        col = COLUMN_WIDTH
    )
}

/// The whole guess grid, header first.
pub fn render_grid(history: &[Guess]) -> String {
    let mut lines = vec![render_header()];
    lines.extend(history.iter().map(render_guess));
    lines.join("\n")
}
