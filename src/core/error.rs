use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// ride_ev library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum RideError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCardInHand(Card),
    #[error("incomplete selection")]
    IncompleteSelection,
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    #[error("Invalid paytable: {0}")]
    InvalidPaytable(String),
}
