//! This is the core module. It exports the card, deck, hand
//! and hand category code.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Bitset of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// 5 Card hand category code.
mod category;
/// Export the trait and the results.
pub use self::category::{Category, Classifiable, classify_five};

/// Error type shared by the whole crate.
mod error;
pub use self::error::RideError;
