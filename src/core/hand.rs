use super::{Card, CardBitSet, CardBitSetIter, RideError, Suit, Value};

/// A set of distinct cards.
///
/// A hand can't hold the same card twice. For classification it
/// holds exactly five cards.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand(CardBitSet);

impl Hand {
    /// Create a new empty hand
    ///
    /// # Examples
    ///
    /// ```
    /// use ride_ev::core::Hand;
    ///
    /// let hand = Hand::new();
    ///
    /// assert!(hand.is_empty());
    /// ```
    pub fn new() -> Self {
        Self(CardBitSet::new())
    }

    /// Create a hand from some cards. Repeated cards collapse into one.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().collect())
    }

    /// Given a card, is it in the current hand?
    ///
    /// # Examples
    ///
    /// ```
    /// use ride_ev::core::{Card, Hand, Suit, Value};
    ///
    /// let mut hand = Hand::new();
    ///
    /// let card = Card::new(Value::Ace, Suit::Club);
    /// assert!(!hand.contains(&card));
    ///
    /// hand.insert(card);
    /// assert!(hand.contains(&card));
    /// ```
    pub fn contains(&self, c: &Card) -> bool {
        self.0.contains(*c)
    }

    /// Remove a card from the hand.
    /// Returns true if the card was in the hand.
    pub fn remove(&mut self, c: &Card) -> bool {
        self.0.remove(*c)
    }

    /// Add a card to the hand.
    /// Returns false if the card was already in the hand.
    pub fn insert(&mut self, c: Card) -> bool {
        self.0.insert(c)
    }

    /// A copy of this hand with one more card.
    pub fn with(mut self, c: Card) -> Self {
        self.0.insert(c);
        self
    }

    pub fn count(&self) -> usize {
        self.0.count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> CardBitSetIter {
        self.0.into_iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Parse a run of two character card codes like `AhKhQh`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ride_ev::core::{Hand, RideError};
    ///
    /// assert_eq!(3, Hand::new_from_str("AhKhQh").unwrap().count());
    /// assert!(matches!(
    ///     Hand::new_from_str("AhAh"),
    ///     Err(RideError::DuplicateCardInHand(_))
    /// ));
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, RideError> {
        let mut chars = hand_string.chars();
        let mut bitset = CardBitSet::new();

        while let Some(vc) = chars.next() {
            let v = Value::from_char(vc).ok_or(RideError::UnexpectedValueChar)?;
            let s = chars
                .next()
                .ok_or(RideError::TooFewChars)
                .map(Suit::from_char)?
                .ok_or(RideError::UnexpectedSuitChar)?;

            let c = Card::new(v, s);
            if !bitset.insert(c) {
                return Err(RideError::DuplicateCardInHand(c));
            }
        }

        Ok(Self(bitset))
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Hand> for CardBitSet {
    fn from(val: Hand) -> Self {
        val.0
    }
}

impl From<CardBitSet> for Hand {
    fn from(val: CardBitSet) -> Self {
        Self(val)
    }
}
