//! Package planning requests, responses and the `Planner` seam.

use std::{sync::Arc, time::Duration};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Ceiling, Cost, Offer, RegionId};

/// Parameters for a planning request.
///
/// Absent ceilings impose no constraint on the corresponding total.
///
/// # Examples
/// ```rust
/// use tourpack_core::{Ceiling, Cost, PlanRequest};
///
/// let request = PlanRequest::new("R")
///     .with_max_days(5)
///     .with_max_budget(Cost::from_major_units(25));
/// assert_eq!(request.days_ceiling(), Ceiling::Remaining(5));
/// assert_eq!(PlanRequest::new("R").budget_ceiling(), Ceiling::Unlimited);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// Region whose offers are candidates.
    pub region_id: RegionId,
    /// Upper bound on the package's total days.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_days: Option<u32>,
    /// Upper bound on the package's total cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_budget: Option<Cost>,
}

impl PlanRequest {
    /// Construct an unconstrained request for `region_id`.
    #[must_use]
    pub fn new(region_id: impl Into<RegionId>) -> Self {
        Self {
            region_id: region_id.into(),
            max_days: None,
            max_budget: None,
        }
    }

    /// Bound the package's total duration.
    #[must_use]
    pub const fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Bound the package's total cost.
    #[must_use]
    pub const fn with_max_budget(mut self, budget: Cost) -> Self {
        self.max_budget = Some(budget);
        self
    }

    /// The duration bound as a [`Ceiling`].
    #[must_use]
    pub fn days_ceiling(&self) -> Ceiling<u32> {
        Ceiling::from(self.max_days)
    }

    /// The budget bound as a [`Ceiling`].
    #[must_use]
    pub fn budget_ceiling(&self) -> Ceiling<Cost> {
        Ceiling::from(self.max_budget)
    }
}

/// A selected set of offers with its totals.
///
/// Offers share ownership with the catalog they came from; the package is an
/// independent snapshot that later searches never mutate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Package {
    /// Chosen offers in selection order.
    pub offers: Vec<Arc<Offer>>,
    /// Sum of the offers' costs.
    pub total_cost: Cost,
    /// Sum of the offers' durations.
    pub total_days: u32,
    /// Sum of the offers' cultural values.
    pub cultural_value: u64,
}

impl Package {
    /// A package with no offers.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a package and derive its totals from `offers`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use tourpack_core::{Cost, Offer, Package, PointOfInterest};
    ///
    /// let offer = Arc::new(
    ///     Offer::new(1, "R", "B", Cost::from_major_units(15), 3)
    ///         .with_point_of_interest(PointOfInterest::new(3, "p3", 10)),
    /// );
    /// let package = Package::from_offers(vec![offer]);
    /// assert_eq!(package.total_cost, Cost::from_major_units(15));
    /// assert_eq!(package.total_days, 3);
    /// assert_eq!(package.cultural_value, 10);
    /// ```
    #[must_use]
    pub fn from_offers(offers: Vec<Arc<Offer>>) -> Self {
        let total_cost = offers.iter().map(|offer| offer.cost).sum();
        let total_days = offers
            .iter()
            .map(|offer| offer.duration_days)
            .fold(0, u32::saturating_add);
        let cultural_value = offers
            .iter()
            .map(|offer| offer.cultural_value())
            .fold(0, u64::saturating_add);
        Self {
            offers,
            total_cost,
            total_days,
            cultural_value,
        }
    }

    /// Whether no offer was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Split into `(offers, total cost, cultural value)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Arc<Offer>>, Cost, u64) {
        (self.offers, self.total_cost, self.cultural_value)
    }
}

/// Search measurements reported alongside a package.
///
/// Diagnostics describe how the answer was found; they never influence it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent planning.
    pub solve_time: Duration,
    /// Offers in the requested region.
    pub candidates: u64,
    /// Search nodes visited, the empty package included.
    pub nodes_explored: u64,
    /// Candidates rejected for exceeding the remaining budget.
    pub pruned_budget: u64,
    /// Candidates rejected for exceeding the remaining days.
    pub pruned_duration: u64,
    /// Candidates rejected for revisiting a chosen point of interest.
    pub pruned_overlap: u64,
    /// Times a strictly better package replaced the best known one.
    pub incumbent_updates: u64,
}

/// Response from a planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResponse {
    /// The best package found.
    pub package: Package,
    /// How the search went.
    pub diagnostics: Diagnostics,
}

/// Select the package that maximises cultural value within a region.
///
/// Planning is infallible: an unknown region or a region without feasible
/// offers yields the empty package. Planners must be `Send + Sync` so one
/// catalog can serve concurrent requests.
pub trait Planner: Send + Sync {
    /// Plan a package for `request`.
    fn plan(&self, request: &PlanRequest) -> PlanResponse;
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::PointOfInterest;
    use rstest::rstest;

    #[rstest]
    fn response_survives_json_round_trip() {
        let offer = Arc::new(
            Offer::new(1, "R", "A", Cost::from_major_units(10), 2)
                .with_point_of_interest(PointOfInterest::new(1, "p1", 5))
                .with_point_of_interest(PointOfInterest::new(2, "p2", 3)),
        );
        let response = PlanResponse {
            package: Package::from_offers(vec![offer]),
            diagnostics: Diagnostics {
                solve_time: Duration::from_millis(3),
                candidates: 3,
                nodes_explored: 6,
                ..Diagnostics::default()
            },
        };

        let json = serde_json::to_string(&response).expect("serialise response");
        let decoded: PlanResponse = serde_json::from_str(&json).expect("deserialise response");
        assert_eq!(decoded, response);
        let poi_ids: Vec<_> = decoded
            .package
            .offers
            .first()
            .map(|offer| offer.poi_ids().collect())
            .unwrap_or_default();
        assert_eq!(poi_ids, vec![1, 2]);
    }

    #[rstest]
    fn request_ceilings_default_to_unlimited() {
        let request: PlanRequest =
            serde_json::from_str(r#"{"region_id":"R"}"#).expect("deserialise request");
        assert_eq!(request, PlanRequest::new("R"));
    }
}
