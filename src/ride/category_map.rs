use std::ops::{Index, IndexMut};

use crate::core::Category;

/// A value for every hand category.
///
/// Backed by an array indexed by `Category::index()`, so lookups can't
/// miss and iteration always runs from the best category to the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryMap<T>([T; Category::COUNT]);

impl<T> CategoryMap<T> {
    /// Build a map from values listed in `Category::all()` order.
    pub const fn new(values: [T; Category::COUNT]) -> Self {
        Self(values)
    }

    /// Build a map by calling `f` for every category.
    ///
    /// ```
    /// use ride_ev::core::Category;
    /// use ride_ev::ride::CategoryMap;
    ///
    /// let names = CategoryMap::from_fn(|c| c.name().len());
    /// assert_eq!(7, names[Category::Nothing]);
    /// ```
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self(Category::all().map(&mut f))
    }

    pub fn get(&self, category: Category) -> &T {
        &self.0[category.index()]
    }

    /// Pairs of category and value, best category first.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::all().into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Apply `f` to every value.
    pub fn map<U>(&self, mut f: impl FnMut(Category, &T) -> U) -> CategoryMap<U> {
        CategoryMap::from_fn(|c| f(c, self.get(c)))
    }
}

impl<T: Default> Default for CategoryMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.0[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.0[category.index()]
    }
}

// Serialized as an object keyed by the category name.
#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CategoryMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, value) in self.iter() {
            map.serialize_entry(category.name(), value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct CategoryMapVisitor<T>(std::marker::PhantomData<T>);

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for CategoryMapVisitor<T> {
    type Value = CategoryMap<T>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map with one entry for every hand category")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut slots: [Option<T>; Category::COUNT] = Default::default();
        while let Some(category) = access.next_key::<Category>()? {
            let slot = &mut slots[category.index()];
            if slot.is_some() {
                return Err(serde::de::Error::duplicate_field(category.name()));
            }
            *slot = Some(access.next_value()?);
        }

        let mut values = Vec::with_capacity(Category::COUNT);
        for (category, slot) in Category::all().into_iter().zip(slots) {
            let value = slot
                .ok_or_else(|| <A::Error as serde::de::Error>::missing_field(category.name()))?;
            values.push(value);
        }
        values
            .try_into()
            .map(CategoryMap)
            .map_err(|_| serde::de::Error::custom("wrong number of hand categories"))
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for CategoryMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryMapVisitor(std::marker::PhantomData))
    }
}
