use super::{Card, CardType, Catalog};

mod feedback;

/// The two-card catalog used by most scenarios.
fn knight_and_giant() -> Catalog {
    Catalog::new(vec![
        Card::new("KNIGHT", 3, CardType::Troop),
        Card::new("GIANT", 5, CardType::Troop),
    ])
    .unwrap()
}
