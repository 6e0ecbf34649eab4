use std::fmt;

use super::RideError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    /// Anything past the Ace is clamped to the Ace.
    ///
    /// ```
    /// use ride_ev::core::Value;
    ///
    /// assert_eq!(Value::Four, Value::from_u8(2));
    /// assert_eq!(Value::Ace, Value::from_u8(12));
    /// ```
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(Self::Ace as u8))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored.
    ///
    /// ```
    /// use ride_ev::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('t'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::Ace),
            'K' => Some(Self::King),
            'Q' => Some(Self::Queen),
            'J' => Some(Self::Jack),
            'T' => Some(Self::Ten),
            '9' => Some(Self::Nine),
            '8' => Some(Self::Eight),
            '7' => Some(Self::Seven),
            '6' => Some(Self::Six),
            '5' => Some(Self::Five),
            '4' => Some(Self::Four),
            '3' => Some(Self::Three),
            '2' => Some(Self::Two),
            _ => None,
        }
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        match self {
            Self::Ace => 'A',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Jack => 'J',
            Self::Ten => 'T',
            Self::Nine => '9',
            Self::Eight => '8',
            Self::Seven => '7',
            Self::Six => '6',
            Self::Five => '5',
            Self::Four => '4',
            Self::Three => '3',
            Self::Two => '2',
        }
    }

    /// Is this one of the values that a high pair is made of?
    /// Tens, face cards and aces.
    pub fn is_ten_or_better(self) -> bool {
        self >= Self::Ten
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Translate a u8 into a suit.
    /// Anything past the Diamond is clamped to the Diamond.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s.min(Self::Diamond as u8))]
    }

    /// Given a character parse that char into a suit.
    /// Case is ignored.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'd' => Some(Self::Diamond),
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'c' => Some(Self::Club),
            _ => None,
        }
    }

    /// This Suit to a char
    pub fn to_char(self) -> char {
        match self {
            Self::Diamond => 'd',
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Club => 'c',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Cards are packed into a dense index `value * 4 + suit`.
/// The order of that index is the canonical deck order.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.value as u8) * 4 + (card.suit as u8)
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl TryFrom<&str> for Card {
    type Error = RideError;

    /// Parse a two character code like `Ah` or `Td`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        let v = chars
            .next()
            .ok_or(RideError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(RideError::UnexpectedValueChar)?;
        let s = chars
            .next()
            .ok_or(RideError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(RideError::UnexpectedSuitChar)?;

        if chars.next().is_some() {
            return Err(RideError::UnparsedCharsRemaining);
        }
        Ok(Self::new(v, s))
    }
}

impl std::str::FromStr for Card {
    type Err = RideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

// Cards go over the wire as their two character code.
#[cfg(feature = "serde")]
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Card::try_from(code.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        // Make sure that equals works
        assert!(c1 == c1);
        // Make sure that the values are ordered
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Make sure that suit is used.
        assert!(c3 > c2);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Value::Two, Value::from_u8(0));
        assert_eq!(Value::Ace, Value::from_u8(12));
        assert_eq!(Value::Ace, Value::from_u8(200));
        assert_eq!(Suit::Diamond, Suit::from_u8(3));
    }

    #[test]
    fn test_u8_round_trip_covers_deck() {
        for idx in 0..52u8 {
            assert_eq!(idx, u8::from(Card::from(idx)));
        }
        assert_eq!(Card::new(Value::Two, Suit::Spade), Card::from(0));
        assert_eq!(Card::new(Value::Ace, Suit::Diamond), Card::from(51));
    }

    #[test]
    fn test_char_round_trip() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!(
            Card::new(Value::Ace, Suit::Heart),
            Card::try_from("Ah").unwrap()
        );
        assert_eq!(
            Card::new(Value::Ten, Suit::Diamond),
            "Td".parse::<Card>().unwrap()
        );
        assert_eq!("Td", Card::new(Value::Ten, Suit::Diamond).to_string());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Card::try_from(""),
            Err(RideError::TooFewChars)
        ));
        assert!(matches!(
            Card::try_from("A"),
            Err(RideError::TooFewChars)
        ));
        assert!(matches!(
            Card::try_from("1h"),
            Err(RideError::UnexpectedValueChar)
        ));
        assert!(matches!(
            Card::try_from("Ax"),
            Err(RideError::UnexpectedSuitChar)
        ));
        assert!(matches!(
            Card::try_from("Ahh"),
            Err(RideError::UnparsedCharsRemaining)
        ));
    }

    #[test]
    fn test_ten_or_better() {
        assert!(!Value::Nine.is_ten_or_better());
        assert!(Value::Ten.is_ten_or_better());
        assert!(Value::Ace.is_ten_or_better());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_code() {
        let c = Card::new(Value::King, Suit::Club);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!("\"Kc\"", json);
        assert_eq!(c, serde_json::from_str::<Card>(&json).unwrap());
        assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
