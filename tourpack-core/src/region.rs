//! Regions group offers; the planner only uses them as a filter key.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a [`Region`].
pub type RegionId = String;

/// A geographic area that owns touring offers.
///
/// # Examples
/// ```
/// use tourpack_core::Region;
///
/// let region = Region::new("lig", "Liguria");
/// assert_eq!(region.id, "lig");
/// assert_eq!(region.name, "Liguria");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    /// Unique identifier.
    pub id: RegionId,
    /// Human-readable name.
    pub name: String,
}

impl Region {
    /// Construct a region from its identifier and display name.
    #[must_use]
    pub fn new(id: impl Into<RegionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
