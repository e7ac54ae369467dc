use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::game::{Card, Catalog, Feedback, Guess};


/// A bot which narrows down the solution from the feedback on its guesses.
#[derive(Debug, Clone)]
pub struct Solver {
    /// Cards still consistent with every piece of feedback seen so far.
    pub candidates: Vec<Card>,
}

impl Solver {
    pub fn new(catalog: &Catalog) -> Self {
        Solver {
            candidates: catalog.cards().to_vec(),
        }
    }

    /// Choose the next card to guess, or None if nothing fits the feedback.
    pub fn next_guess<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Card> {
        self.candidates.choose(rng)
    }

    /// Drop every candidate which, had it been the solution, would have produced
    /// different feedback for this guess.
    pub fn update(&mut self, guess: &Guess) {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::evaluate(&guess.card, candidate) == guess.feedback);
        debug!(
            "Guess {:?} narrowed candidates from {} to {}",
            guess.card.name,
            before,
            self.candidates.len()
        );
    }
}
