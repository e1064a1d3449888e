use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// RS-Truco library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Hash, PartialEq, Eq)]
pub enum RSTrucoError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Truco hands have exactly 3 cards, found {0}")]
    WrongHandSize(usize),
}
