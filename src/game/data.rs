use lazy_static::lazy_static;
use rand::{seq::SliceRandom, Rng};
use std::collections::HashSet;
use thiserror::Error;

use super::{card::Card, GuessError};

lazy_static! {
    /// The standard set of cards the game is played with.
    pub static ref CATALOG: Catalog = {
        let cards: Vec<Card> = serde_json::from_str(include_str!("data/cards.json"))
            .expect("bundled card list is valid json");
        Catalog::new(cards).expect("bundled card list is a valid catalog")
    };
}

/// Reasons a list of cards can't be used as a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no cards")]
    Empty,
    #[error("card name {0:?} appears more than once")]
    DuplicateName(String),
    #[error("card {0:?} has no elixir cost")]
    ZeroElixir(String),
}

/// The fixed set of cards usable as guesses or solutions.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Build a catalog, checking it is non-empty with unique names and positive costs.
    pub fn new(cards: Vec<Card>) -> Result<Self, CatalogError> {
        if cards.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut names = HashSet::new();
        for card in &cards {
            if card.elixir_cost == 0 {
                return Err(CatalogError::ZeroElixir(card.name.clone()));
            }
            if !names.insert(card.normalized_name()) {
                return Err(CatalogError::DuplicateName(card.name.clone()));
            }
        }
        Ok(Catalog { cards })
    }

    /// The standard catalog.
    pub fn standard() -> Self {
        CATALOG.clone()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Look up the card with the given name, ignoring case.
    pub fn find(&self, raw: &str) -> Result<&Card, GuessError> {
        self.cards
            .iter()
            .find(|card| card.is_named(raw))
            .ok_or_else(|| GuessError::InvalidCardName(raw.to_owned()))
    }

    /// Pick a card uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Card {
        self.cards
            .choose(rng)
            .expect("catalog is checked non-empty on construction")
    }
}
