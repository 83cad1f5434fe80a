//! Depth-first enumeration of conflict-free offer combinations.
//!
//! Every node of the search tree is a partial package built from candidates
//! in traversal order. A node is a feasible package in its own right, so the
//! incumbent is offered every node, the empty root included. Children extend
//! the node with one later candidate that fits the remaining budget, the
//! remaining days and the points of interest not yet covered.

use std::{collections::HashSet, sync::Arc};

use tourpack_core::{Ceiling, Cost, Offer, PoiId};

/// An offer queued for the search together with its precomputed value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub(crate) offer: &'a Arc<Offer>,
    pub(crate) value: u64,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(offer: &'a Arc<Offer>) -> Self {
        Self {
            offer,
            value: offer.cultural_value(),
        }
    }
}

/// Counters gathered while searching.
///
/// Each pruning counter records one rejected child; a candidate failing
/// several checks is counted once, against the first check it fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    /// Nodes visited, the empty root included.
    pub(crate) nodes_explored: u64,
    /// Children rejected because their cost exceeds the remaining budget.
    pub(crate) pruned_budget: u64,
    /// Children rejected because their days exceed the remaining days.
    pub(crate) pruned_duration: u64,
    /// Children rejected because they revisit a covered point of interest.
    pub(crate) pruned_overlap: u64,
    /// Times the best known package was replaced.
    pub(crate) incumbent_updates: u64,
}

impl SearchStats {
    #[inline]
    const fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    const fn on_rejected(&mut self, rejection: Rejection) {
        let counter = match rejection {
            Rejection::Budget => &mut self.pruned_budget,
            Rejection::Duration => &mut self.pruned_duration,
            Rejection::Overlap => &mut self.pruned_overlap,
        };
        *counter = counter.saturating_add(1);
    }

    #[inline]
    const fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add(1);
    }
}

/// Why a candidate could not extend the current node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Budget,
    Duration,
    Overlap,
}

/// The partial package at the current node and what it has consumed.
#[derive(Debug)]
struct Frontier<'a> {
    partial: Vec<&'a Arc<Offer>>,
    remaining_days: Ceiling<u32>,
    remaining_budget: Ceiling<Cost>,
    value: u64,
    covered: HashSet<PoiId>,
}

/// Scalar state saved before a push and restored by the matching pop.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    remaining_days: Ceiling<u32>,
    remaining_budget: Ceiling<Cost>,
    value: u64,
}

impl<'a> Frontier<'a> {
    fn new(remaining_days: Ceiling<u32>, remaining_budget: Ceiling<Cost>) -> Self {
        Self {
            partial: Vec::new(),
            remaining_days,
            remaining_budget,
            value: 0,
            covered: HashSet::new(),
        }
    }

    /// Checks run budget first, then duration, then overlap.
    fn rejection(&self, offer: &Offer) -> Option<Rejection> {
        if !self.remaining_budget.admits(offer.cost) {
            Some(Rejection::Budget)
        } else if !self.remaining_days.admits(offer.duration_days) {
            Some(Rejection::Duration)
        } else if !offer.is_disjoint_from(&self.covered) {
            Some(Rejection::Overlap)
        } else {
            None
        }
    }

    fn push(&mut self, candidate: Candidate<'a>) -> Checkpoint {
        let checkpoint = Checkpoint {
            remaining_days: self.remaining_days,
            remaining_budget: self.remaining_budget,
            value: self.value,
        };
        let offer = candidate.offer;
        self.remaining_days = self.remaining_days.after(offer.duration_days);
        self.remaining_budget = self.remaining_budget.after(offer.cost);
        self.value = self.value.saturating_add(candidate.value);
        self.covered.extend(offer.poi_ids());
        self.partial.push(offer);
        checkpoint
    }

    fn pop(&mut self, checkpoint: Checkpoint) {
        // Members are pairwise disjoint, so every id of the popped offer was
        // added by that offer alone.
        if let Some(offer) = self.partial.pop() {
            for id in offer.poi_ids() {
                self.covered.remove(&id);
            }
        }
        self.remaining_days = checkpoint.remaining_days;
        self.remaining_budget = checkpoint.remaining_budget;
        self.value = checkpoint.value;
    }
}

/// Best package seen so far.
///
/// `value` starts as `None` so that the empty root always qualifies.
#[derive(Debug, Default)]
struct Incumbent<'a> {
    offers: Vec<&'a Arc<Offer>>,
    value: Option<u64>,
}

impl<'a> Incumbent<'a> {
    /// Snapshot `frontier` when it is strictly better. Returns whether it was.
    fn consider(&mut self, frontier: &Frontier<'a>) -> bool {
        if self.value.is_some_and(|best| frontier.value <= best) {
            return false;
        }
        self.offers.clone_from(&frontier.partial);
        self.value = Some(frontier.value);
        true
    }
}

/// Result of a completed search.
#[derive(Debug)]
pub(crate) struct SearchOutcome<'a> {
    pub(crate) offers: Vec<&'a Arc<Offer>>,
    pub(crate) value: u64,
    pub(crate) stats: SearchStats,
}

struct Search<'c, 'a> {
    candidates: &'c [Candidate<'a>],
    incumbent: Incumbent<'a>,
    stats: SearchStats,
}

impl<'a> Search<'_, 'a> {
    fn explore(&mut self, cursor: usize, frontier: &mut Frontier<'a>) {
        self.stats.on_node_explored();
        if self.incumbent.consider(frontier) {
            self.stats.on_incumbent_update();
        }

        let candidates = self.candidates;
        for (index, candidate) in candidates.iter().enumerate().skip(cursor) {
            if let Some(rejection) = frontier.rejection(candidate.offer) {
                self.stats.on_rejected(rejection);
                continue;
            }
            let checkpoint = frontier.push(*candidate);
            self.explore(index + 1, frontier);
            frontier.pop(checkpoint);
        }
    }
}

/// Find the highest-value conflict-free subset of `candidates` whose totals
/// fit within both ceilings.
///
/// Subsets are enumerated in `candidates` order; among equal values the
/// first subset reached wins.
pub(crate) fn search<'a>(
    candidates: &[Candidate<'a>],
    days: Ceiling<u32>,
    budget: Ceiling<Cost>,
) -> SearchOutcome<'a> {
    let mut search = Search {
        candidates,
        incumbent: Incumbent::default(),
        stats: SearchStats::default(),
    };
    let mut frontier = Frontier::new(days, budget);
    search.explore(0, &mut frontier);

    let Search {
        incumbent, stats, ..
    } = search;
    SearchOutcome {
        offers: incumbent.offers,
        value: incumbent.value.unwrap_or_default(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tourpack_core::test_support::sample_catalog;
    use tourpack_core::{CatalogIndex, OfferId, OfferLink, PointOfInterest, Region};

    #[fixture]
    fn index() -> CatalogIndex {
        CatalogIndex::load(&sample_catalog()).expect("memory store is infallible")
    }

    fn ids(outcome: &SearchOutcome<'_>) -> Vec<OfferId> {
        outcome.offers.iter().map(|offer| offer.id).collect()
    }

    fn run(index: &CatalogIndex, days: Ceiling<u32>, budget: Ceiling<Cost>) -> SearchOutcome<'_> {
        let candidates: Vec<Candidate<'_>> =
            index.offers_in_region("R").map(Candidate::new).collect();
        search(&candidates, days, budget)
    }

    #[rstest]
    fn unconstrained_search_visits_every_compatible_subset(index: CatalogIndex) {
        let outcome = run(&index, Ceiling::Unlimited, Ceiling::Unlimited);
        assert_eq!(ids(&outcome), vec![1, 2]);
        assert_eq!(outcome.value, 18);
        // {}, {A}, {A,B}, {B}, {B,C}, {C}
        assert_eq!(outcome.stats.nodes_explored, 6);
        // C after A, and C after {A,B}.
        assert_eq!(outcome.stats.pruned_overlap, 2);
        assert_eq!(outcome.stats.pruned_budget, 0);
        assert_eq!(outcome.stats.pruned_duration, 0);
        // {}, {A}, {A,B}
        assert_eq!(outcome.stats.incumbent_updates, 3);
    }

    #[rstest]
    fn budget_is_checked_before_overlap(index: CatalogIndex) {
        let outcome = run(
            &index,
            Ceiling::Unlimited,
            Ceiling::Remaining(Cost::from_major_units(10)),
        );
        assert_eq!(ids(&outcome), vec![1]);
        assert_eq!(outcome.value, 8);
        // B and C under {A}, then B at the root. C under {A} also overlaps
        // but is counted against the budget.
        assert_eq!(outcome.stats.pruned_budget, 3);
        assert_eq!(outcome.stats.pruned_overlap, 0);
    }

    #[rstest]
    fn duration_prunes_when_budget_admits(index: CatalogIndex) {
        let outcome = run(&index, Ceiling::Remaining(2), Ceiling::Unlimited);
        assert_eq!(ids(&outcome), vec![1]);
        assert!(outcome.stats.pruned_duration > 0);
        assert_eq!(outcome.stats.pruned_budget, 0);
    }

    #[rstest]
    fn zero_ceilings_keep_the_empty_package(index: CatalogIndex) {
        let outcome = run(&index, Ceiling::Remaining(0), Ceiling::Remaining(Cost::ZERO));
        assert!(outcome.offers.is_empty());
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.stats.nodes_explored, 1);
        assert_eq!(outcome.stats.incumbent_updates, 1);
        assert_eq!(outcome.stats.pruned_budget, 3);
    }

    #[rstest]
    fn no_candidates_yield_the_empty_root() {
        let outcome = search(&[], Ceiling::Unlimited, Ceiling::Unlimited);
        assert!(outcome.offers.is_empty());
        assert_eq!(outcome.value, 0);
        assert_eq!(outcome.stats.nodes_explored, 1);
    }

    #[rstest]
    fn frontier_pop_restores_pushed_state(index: CatalogIndex) {
        let offer = index.offers_by_id().get(&1).expect("offer A");
        let mut frontier = Frontier::new(Ceiling::Remaining(5), Ceiling::Unlimited);
        let checkpoint = frontier.push(Candidate::new(offer));
        assert_eq!(frontier.remaining_days, Ceiling::Remaining(3));
        assert_eq!(frontier.value, 8);
        assert_eq!(frontier.covered.len(), 2);

        frontier.pop(checkpoint);
        assert!(frontier.partial.is_empty());
        assert!(frontier.covered.is_empty());
        assert_eq!(frontier.remaining_days, Ceiling::Remaining(5));
        assert_eq!(frontier.value, 0);
    }

    #[rstest]
    fn equal_value_keeps_first_snapshot() {
        let index = CatalogIndex::from_parts(
            Vec::<Region>::new(),
            [
                Offer::new(1, "R", "first", Cost::from_major_units(1), 1),
                Offer::new(2, "R", "second", Cost::from_major_units(1), 1),
            ],
            [PointOfInterest::new(1, "shared", 4)],
            [OfferLink::new(1, 1), OfferLink::new(2, 1)],
        );
        let outcome = run(&index, Ceiling::Unlimited, Ceiling::Unlimited);
        assert_eq!(ids(&outcome), vec![1]);
        assert_eq!(outcome.stats.incumbent_updates, 2);
    }
}
