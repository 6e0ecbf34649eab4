//! Paytables and the exhaustive expected value calculation.
//!
//! An [`EvCalculator`] owns a [`Paytable`]. Given three hole cards and
//! one shared card it tries every card left in the deck as the last
//! card and reports the resulting [`EnumerationResult`].

/// A total map from each hand category to a value.
mod category_map;
pub use self::category_map::CategoryMap;

/// Payout per hand category.
mod paytable;
pub use self::paytable::Paytable;

/// What an evaluation produces.
mod result;
pub use self::result::{EnumerationResult, Outcome};

/// Input validation and the enumeration itself.
mod calculator;
pub use self::calculator::{EvCalculator, KnownCards};
