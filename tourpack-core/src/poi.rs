#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a [`PointOfInterest`].
pub type PoiId = u64;

/// An attraction worth visiting.
///
/// Identity is the `id`: two points of interest are the same attraction when
/// their identifiers match, whatever their other fields say.
///
/// # Examples
/// ```
/// use tourpack_core::PointOfInterest;
///
/// let poi = PointOfInterest::new(1, "Colosseum", 10);
///
/// assert_eq!(poi.id, 1);
/// assert_eq!(poi.cultural_value, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointOfInterest {
    /// Unique identifier.
    pub id: PoiId,
    /// Human-readable name.
    pub name: String,
    /// Non-negative cultural-value score.
    pub cultural_value: u32,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest` with the provided cultural value.
    #[must_use]
    pub fn new(id: PoiId, name: impl Into<String>, cultural_value: u32) -> Self {
        Self {
            id,
            name: name.into(),
            cultural_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poi_keeps_cultural_value() {
        let poi = PointOfInterest::new(3, "Pantheon", 8);
        assert_eq!(poi.cultural_value, 8);
        assert_eq!(poi.name, "Pantheon");
    }
}
