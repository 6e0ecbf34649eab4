use std::fmt::{self, Debug};
use std::ops::{BitAnd, BitOr, BitOrAssign, Not, Sub};

use super::Card;
#[cfg(feature = "serde")]
use serde::ser::SerializeSeq;

/// This struct is a bitset for cards.
/// Each card is represented by a bit in a 64 bit integer,
/// at the card's dense `u8` index.
///
/// The bit is set if the card present
/// The bit is unset if the card not in the set
///
/// Iteration always walks from the lowest index up, which is
/// the canonical deck order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardBitSet {
    // The bitset
    cards: u64,
}

const FIFTY_TWO_ONES: u64 = (1 << 52) - 1;

impl CardBitSet {
    /// Create a new empty bitset
    ///
    /// ```
    /// use ride_ev::core::CardBitSet;
    /// let cards = CardBitSet::new();
    /// assert!(cards.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self { cards: 0 }
    }

    /// The set of every card in a 52 card deck.
    pub const fn full() -> Self {
        Self {
            cards: FIFTY_TWO_ONES,
        }
    }

    /// Insert a card into the bitset.
    ///
    /// Returns false if the card was already there.
    ///
    /// ```
    /// use ride_ev::core::{Card, CardBitSet, Suit, Value};
    /// let mut cards = CardBitSet::new();
    ///
    /// assert!(cards.insert(Card::new(Value::Six, Suit::Club)));
    /// assert!(cards.insert(Card::new(Value::King, Suit::Club)));
    /// assert!(!cards.insert(Card::new(Value::King, Suit::Club)));
    /// assert_eq!(2, cards.count());
    /// ```
    pub fn insert(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards |= 1 << u8::from(card);
        !had
    }

    /// Remove a card from the bitset
    ///
    /// Returns true if the card was present.
    pub fn remove(&mut self, card: Card) -> bool {
        let had = self.contains(card);
        self.cards &= !(1 << u8::from(card));
        had
    }

    /// Is the card in the bitset ?
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1 << u8::from(card))) != 0
    }

    /// Is the bitset empty ?
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }

    /// How many cards are in the bitset ?
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.cards = 0;
    }
}

impl Default for CardBitSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for CardBitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries((*self).into_iter().map(|c| c.to_string()))
            .finish()
    }
}

impl BitOr<CardBitSet> for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitOr<Card> for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Card) -> Self::Output {
        Self {
            cards: self.cards | (1 << u8::from(rhs)),
        }
    }
}

impl BitOrAssign<CardBitSet> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.cards |= rhs.cards;
    }
}

impl BitOrAssign<Card> for CardBitSet {
    fn bitor_assign(&mut self, rhs: Card) {
        self.cards |= 1 << u8::from(rhs);
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

/// Set difference.
impl Sub for CardBitSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            cards: self.cards & !rhs.cards,
        }
    }
}

impl Not for CardBitSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            cards: !self.cards & FIFTY_TWO_ONES, // Only keep the first 52 bits
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// The iterator for the CardBitSet
/// It iterates over the cards in the bitset, lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter(u64);

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CardBitSetIter(self.cards)
    }
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let card = self.0.trailing_zeros();
        self.0 &= !(1 << card);

        Some(Card::from(card as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CardBitSetIter {}

#[cfg(feature = "serde")]
impl serde::Serialize for CardBitSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.count()))?;
        for card in (*self).into_iter() {
            seq.serialize_element(&card)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CardBitSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for CardBitSetVisitor {
    type Value = CardBitSet;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence of cards")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = CardBitSet::new();
        while let Some(card) = seq.next_element()? {
            set.insert(card);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardBitSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CardBitSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_empty() {
        let cards = CardBitSet::new();
        assert!(cards.is_empty());
        assert_eq!(0, cards.count());
    }

    #[test]
    fn test_full_has_every_index() {
        let all = CardBitSet::full();
        assert_eq!(52, all.count());
        for idx in 0..52u8 {
            assert!(all.contains(Card::from(idx)));
        }
        assert_eq!(CardBitSet::new(), !all);
    }

    #[test]
    fn test_remove() {
        let mut cards = CardBitSet::full();
        let c = Card::new(Value::Ace, Suit::Heart);
        assert!(cards.remove(c));
        assert!(!cards.contains(c));
        assert!(!cards.remove(c));
        assert_eq!(51, cards.count());
    }

    #[test]
    fn test_difference() {
        let known: CardBitSet = [
            Card::new(Value::Ace, Suit::Heart),
            Card::new(Value::King, Suit::Heart),
        ]
        .into_iter()
        .collect();

        let rest = CardBitSet::full() - known;
        assert_eq!(50, rest.count());
        assert!((rest & known).is_empty());
        assert_eq!(CardBitSet::full(), rest | known);
        assert_eq!(rest, !known);
    }

    #[test]
    fn test_iterates_in_index_order() {
        let cards: CardBitSet = [Card::from(40u8), Card::from(3u8), Card::from(17u8)]
            .into_iter()
            .collect();
        let order: Vec<u8> = cards.into_iter().map(u8::from).collect();
        assert_eq!(vec![3, 17, 40], order);
        assert_eq!(3, cards.into_iter().len());
    }

    #[test]
    fn test_formatting_cards() {
        let mut cards = CardBitSet::new();
        cards.insert(Card::new(Value::Ace, Suit::Club));
        cards.insert(Card::new(Value::King, Suit::Diamond));
        cards.insert(Card::new(Value::Three, Suit::Heart));

        assert_eq!(format!("{:?}", cards), "{\"3h\", \"Kd\", \"Ac\"}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_sequence() {
        let cards: CardBitSet = [
            Card::new(Value::Two, Suit::Club),
            Card::new(Value::Ten, Suit::Spade),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&cards).unwrap();
        assert_eq!("[\"2c\",\"Ts\"]", json);
        assert_eq!(cards, serde_json::from_str::<CardBitSet>(&json).unwrap());
    }
}
