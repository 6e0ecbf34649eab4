use crate::core::Category;
#[cfg(feature = "serde")]
use crate::core::RideError;

use super::CategoryMap;

/// The Let It Ride schedule, best category first.
const LET_IT_RIDE: [i64; Category::COUNT] = [1000, 200, 50, 11, 8, 5, 3, 2, 1, -1];

/// Net payout per unit wagered for every hand category.
///
/// A paytable is plain immutable data. It is handed to an
/// `EvCalculator` once and never changes after that.
///
/// ```
/// use ride_ev::core::Category;
/// use ride_ev::ride::Paytable;
///
/// let paytable = Paytable::default();
/// assert_eq!(1000, paytable.payout(Category::RoyalFlush));
/// assert_eq!(-1, paytable.payout(Category::Nothing));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Paytable {
    payouts: CategoryMap<i64>,
}

impl Paytable {
    pub const fn new(payouts: CategoryMap<i64>) -> Self {
        Self { payouts }
    }

    /// The payout for a final hand of this category.
    pub fn payout(&self, category: Category) -> i64 {
        self.payouts[category]
    }

    pub fn payouts(&self) -> &CategoryMap<i64> {
        &self.payouts
    }

    /// Read a paytable from a JSON object keyed by category name.
    ///
    /// All ten categories have to be there.
    ///
    /// ```
    /// use ride_ev::core::Category;
    /// use ride_ev::ride::Paytable;
    ///
    /// let json = r#"{
    ///     "royal_flush": 500, "straight_flush": 100, "four_kind": 40,
    ///     "full_house": 10, "flush": 7, "straight": 4, "three_kind": 3,
    ///     "two_pair": 2, "pair_10_or_better": 1, "nothing": -1
    /// }"#;
    /// let paytable = Paytable::from_json(json).unwrap();
    /// assert_eq!(500, paytable.payout(Category::RoyalFlush));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, RideError> {
        serde_json::from_str(json).map_err(|e| RideError::InvalidPaytable(e.to_string()))
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::new(CategoryMap::new(LET_IT_RIDE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let p = Paytable::default();
        let expected = [
            (Category::RoyalFlush, 1000),
            (Category::StraightFlush, 200),
            (Category::FourKind, 50),
            (Category::FullHouse, 11),
            (Category::Flush, 8),
            (Category::Straight, 5),
            (Category::ThreeKind, 3),
            (Category::TwoPair, 2),
            (Category::Pair10OrBetter, 1),
            (Category::Nothing, -1),
        ];
        for (category, payout) in expected {
            assert_eq!(payout, p.payout(category), "{}", category);
        }
    }

    #[test]
    fn test_custom_schedule() {
        let p = Paytable::new(CategoryMap::from_fn(|c| c.index() as i64));
        assert_eq!(0, p.payout(Category::RoyalFlush));
        assert_eq!(9, p.payout(Category::Nothing));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let p = Paytable::default();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(p, Paytable::from_json(&json).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_missing_category() {
        let err = Paytable::from_json(r#"{"royal_flush": 800}"#).unwrap_err();
        assert!(matches!(err, RideError::InvalidPaytable(_)));
        assert!(err.to_string().contains("straight_flush"));
    }
}
