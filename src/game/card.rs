use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

/// Category of a card.
#[derive(
    Debug,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum CardType {
    Troop,
    Spell,
    Building,
}

/// A card which can be guessed, or be the solution.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// Display name, unique within a catalog ignoring case.
    pub name: String,
    /// Elixir cost to play the card.
    #[serde(rename = "elixir")]
    pub elixir_cost: u8,
    #[serde(rename = "type")]
    pub card_type: CardType,
}

impl Card {
    #[cfg(test)]
    pub fn new(name: &str, elixir_cost: u8, card_type: CardType) -> Self {
        Card {
            name: name.to_owned(),
            elixir_cost,
            card_type,
        }
    }

    /// The name in the form used for matching.
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    /// Whether `raw` names this card. Exact match apart from case.
    pub fn is_named(&self, raw: &str) -> bool {
        self.normalized_name() == normalize(raw)
    }
}

/// Case-fold a card name for comparison.
pub fn normalize(name: &str) -> String {
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::{Card, CardType};

    #[test]
    fn name_matching_ignores_case() {
        let card = Card::new("HOG RIDER", 4, CardType::Troop);
        assert!(card.is_named("HOG RIDER"));
        assert!(card.is_named("hog rider"));
        assert!(card.is_named("Hog Rider"));

        // No trimming or partial matches
        assert!(!card.is_named(" hog rider"));
        assert!(!card.is_named("hog"));
        assert!(!card.is_named("HOGRIDER"));
    }

    #[test]
    fn card_type_names() {
        assert_eq!(CardType::Troop.to_string(), "TROOP");
        assert_eq!(CardType::Spell.to_string(), "SPELL");
        assert_eq!(CardType::Building.to_string(), "BUILDING");

        for card_type in CardType::iter() {
            assert_eq!(CardType::from_str(&card_type.to_string()), Ok(card_type));
        }
        assert_eq!(CardType::from_str("building"), Ok(CardType::Building));
        assert!(CardType::from_str("champion").is_err());
    }

    #[test]
    fn deserialize_card() {
        let card: Card =
            serde_json::from_str(r#"{ "name": "X-BOW", "elixir": 6, "type": "BUILDING" }"#)
                .unwrap();
        assert_eq!(card, Card::new("X-BOW", 6, CardType::Building));
    }
}
