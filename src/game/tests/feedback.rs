use super::super::{Card, CardType, ElixirDirection, ElixirStatus, Feedback};

#[test]
fn elixir_direction() {
    let solution = Card::new("WIZARD", 5, CardType::Troop);

    // Solution costs more
    let feedback = Feedback::evaluate(&Card::new("LOG", 2, CardType::Spell), &solution);
    assert_eq!(feedback.elixir_direction, ElixirDirection::Up);
    assert_eq!(feedback.elixir_status, ElixirStatus::Incorrect);

    // Solution costs less
    let feedback = Feedback::evaluate(&Card::new("GOLEM", 8, CardType::Troop), &solution);
    assert_eq!(feedback.elixir_direction, ElixirDirection::Down);
    assert_eq!(feedback.elixir_status, ElixirStatus::Incorrect);

    // Same cost, different card
    let hut = Card::new("GOBLIN HUT", 5, CardType::Building);
    let feedback = Feedback::evaluate(&hut, &solution);
    assert_eq!(feedback.elixir_direction, ElixirDirection::None);
    assert_eq!(feedback.elixir_status, ElixirStatus::Correct);
    assert!(!feedback.name_match);
    assert!(!feedback.type_match);
}

#[test]
fn type_match() {
    let solution = Card::new("X-BOW", 6, CardType::Building);

    let hut = Card::new("GOBLIN HUT", 5, CardType::Building);
    assert!(Feedback::evaluate(&hut, &solution).type_match);
    let rocket = Card::new("ROCKET", 6, CardType::Spell);
    assert!(!Feedback::evaluate(&rocket, &solution).type_match);
    let royal_giant = Card::new("ROYAL GIANT", 6, CardType::Troop);
    assert!(!Feedback::evaluate(&royal_giant, &solution).type_match);
}

#[test]
fn name_match_ignores_case() {
    let solution = Card::new("HOG RIDER", 4, CardType::Troop);

    let feedback = Feedback::evaluate(&Card::new("Hog Rider", 4, CardType::Troop), &solution);
    assert_eq!(
        feedback,
        Feedback {
            name_match: true,
            elixir_status: ElixirStatus::Correct,
            elixir_direction: ElixirDirection::None,
            type_match: true,
        }
    );
}

#[test]
fn scenario_knight_against_giant() {
    let feedback = Feedback::evaluate(
        &Card::new("KNIGHT", 3, CardType::Troop),
        &Card::new("GIANT", 5, CardType::Troop),
    );
    assert_eq!(
        feedback,
        Feedback {
            name_match: false,
            elixir_status: ElixirStatus::Incorrect,
            elixir_direction: ElixirDirection::Up,
            type_match: true,
        }
    );
}
