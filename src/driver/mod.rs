use thiserror::Error;

pub mod direct;
pub mod terminal;

/// Defines a front end which plays the game by calling into the engine.
pub trait Driver {
    /// Play the game.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("game over")]
    GameOver,
    #[error("no card is consistent with the feedback so far")]
    NoCandidates,
    #[error("terminal io error")]
    Io(#[from] std::io::Error),
}
