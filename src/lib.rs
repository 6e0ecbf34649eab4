//! `ride_ev` computes the exact expected value of a partially revealed
//! five card poker hand under a fixed paytable.
//!
//! Three hole cards and one shared card are known. Every one of the 48
//! cards left in the deck is tried as the final card, the resulting five
//! card hand is classified, and the payouts are averaged.
//!
//! ```
//! use ride_ev::ride::EvCalculator;
//!
//! let result = EvCalculator::default()
//!     .evaluate_codes(["Ah", "Kh", "Qh"], "Jh")
//!     .unwrap();
//!
//! assert_eq!(48, result.total);
//! assert!(result.ev > 0.0);
//! ```

/// Allow all the core card functionality to be used
/// externally. Everything in core is agnostic to the paytable.
pub mod core;
/// Paytables and the exhaustive enumeration engine.
pub mod ride;
