//! Disease colors and per-color storage.
//!
//! ## ColorMap
//!
//! Fixed-size per-color storage backed by an array for O(1) access.
//! Supports iteration and indexing by `DiseaseColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four diseases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiseaseColor {
    Blue,
    Yellow,
    Black,
    Red,
}

impl DiseaseColor {
    pub const ALL: [DiseaseColor; 4] = [
        DiseaseColor::Blue,
        DiseaseColor::Yellow,
        DiseaseColor::Black,
        DiseaseColor::Red,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DiseaseColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiseaseColor::Blue => "Blue",
            DiseaseColor::Yellow => "Yellow",
            DiseaseColor::Black => "Black",
            DiseaseColor::Red => "Red",
        };
        f.write_str(name)
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pandemic_sim::disease::{ColorMap, DiseaseColor};
///
/// let mut cubes: ColorMap<u8> = ColorMap::with_value(0);
/// cubes[DiseaseColor::Red] = 2;
///
/// assert_eq!(cubes[DiseaseColor::Red], 2);
/// assert_eq!(cubes.iter().map(|(_, n)| *n).sum::<u8>(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 4],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(DiseaseColor) -> T) -> Self {
        Self {
            data: DiseaseColor::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (DiseaseColor, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (DiseaseColor, &T)> {
        DiseaseColor::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the stored values in color order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<DiseaseColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: DiseaseColor) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<DiseaseColor> for ColorMap<T> {
    fn index_mut(&mut self, color: DiseaseColor) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_index_matches_all() {
        for (i, color) in DiseaseColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn test_color_serde_lowercase() {
        let json = serde_json::to_string(&DiseaseColor::Yellow).unwrap();
        assert_eq!(json, "\"yellow\"");
        let back: DiseaseColor = serde_json::from_str("\"black\"").unwrap();
        assert_eq!(back, DiseaseColor::Black);
    }

    #[test]
    fn test_color_map_factory() {
        let map = ColorMap::new(|c| c.index() * 10);
        assert_eq!(map[DiseaseColor::Blue], 0);
        assert_eq!(map[DiseaseColor::Red], 30);
    }

    #[test]
    fn test_color_map_iter_order() {
        let map: ColorMap<u8> = ColorMap::with_value(1);
        let colors: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(colors, DiseaseColor::ALL.to_vec());
    }
}
