use crate::core::card::{Card, Suit, Value};
use crate::core::card_bit_set::{CardBitSet, CardBitSetIter};

/// Deck struct that can tell quickly if a card is in the deck.
///
/// Iterating a deck always yields cards in the canonical deck order:
/// by value from two up to ace, and by suit within a value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: CardBitSet,
}

impl Deck {
    /// Create the standard 52 card deck
    ///
    /// ```
    /// use ride_ev::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = CardBitSet::new();
        for v in Value::values() {
            for s in Suit::suits() {
                cards.insert(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// All 52 cards in deck order.
    pub fn cards() -> Vec<Card> {
        Self::new().into_iter().collect()
    }

    /// Every card of a full deck that isn't in `known`.
    ///
    /// This is a plain set difference. A set can't hold a card twice so
    /// the result always has `52 - known.count()` cards.
    ///
    /// ```
    /// use ride_ev::core::{Deck, Hand};
    ///
    /// let known = Hand::new_from_str("AhKhQhJh").unwrap();
    /// let remaining = Deck::remaining(known.into());
    ///
    /// assert_eq!(48, remaining.len());
    /// ```
    pub fn remaining(known: CardBitSet) -> Self {
        Self {
            cards: Self::new().cards - known,
        }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(*c)
    }
    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.cards.remove(*c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.count()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Get an iterator from this deck
    pub fn iter(&self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = CardBitSetIter;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> CardBitSetIter {
        self.cards.into_iter()
    }
}

impl From<Deck> for CardBitSet {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_contains_in() {
        let d = Deck::default();
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_remove() {
        let mut d = Deck::default();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(d.contains(&c));
        assert!(d.remove(&c));
        assert!(!d.contains(&c));
        assert!(!d.remove(&c));
    }

    #[test]
    fn test_one_card_per_value_and_suit() {
        let cards = Deck::cards();
        assert_eq!(52, cards.len());

        let pairs: HashSet<(Value, Suit)> = cards.iter().map(|c| (c.value, c.suit)).collect();
        assert_eq!(52, pairs.len());
    }

    #[test]
    fn test_deck_order_is_stable() {
        let cards = Deck::cards();
        assert_eq!(Card::new(Value::Two, Suit::Spade), cards[0]);
        assert_eq!(Card::new(Value::Two, Suit::Club), cards[1]);
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), cards[51]);
        assert!(cards.windows(2).all(|w| u8::from(w[0]) < u8::from(w[1])));
        assert_eq!(cards, Deck::cards());
    }

    #[test]
    fn test_remaining_is_complement() {
        let known: CardBitSet = ["Ah", "Kh", "Qh", "Jh"]
            .iter()
            .map(|s| Card::try_from(*s).unwrap())
            .collect();
        let rest = Deck::remaining(known);

        assert_eq!(48, rest.len());
        for c in known {
            assert!(!rest.contains(&c));
        }
        for c in Deck::new() {
            assert!(rest.contains(&c) ^ known.contains(c));
        }
    }

    #[test]
    fn test_remaining_any_size() {
        assert_eq!(52, Deck::remaining(CardBitSet::new()).len());
        assert_eq!(0, Deck::remaining(CardBitSet::full()).len());
    }
}
