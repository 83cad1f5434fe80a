//! Tests for the `BranchAndBoundPlanner`.

use std::sync::Arc;

use super::*;
use rstest::{fixture, rstest};
use tourpack_core::test_support::sample_catalog;
use tourpack_core::{Cost, Offer, OfferId, OfferLink, PointOfInterest, Region};

#[fixture]
fn index() -> CatalogIndex {
    CatalogIndex::load(&sample_catalog()).expect("memory store is infallible")
}

fn offer_ids(response: &PlanResponse) -> Vec<OfferId> {
    response.package.offers.iter().map(|offer| offer.id).collect()
}

#[rstest]
#[case::budget_and_days(Some(5), Some(25), vec![1, 2], 18, 25)]
#[case::tight_budget(None, Some(15), vec![2], 10, 15)]
#[case::tight_days(Some(1), None, vec![3], 5, 5)]
#[case::unlimited(None, None, vec![1, 2], 18, 25)]
#[case::nothing_fits(Some(0), None, vec![], 0, 0)]
fn plans_sample_region(
    index: CatalogIndex,
    #[case] max_days: Option<u32>,
    #[case] max_budget: Option<u64>,
    #[case] expected_ids: Vec<OfferId>,
    #[case] expected_value: u64,
    #[case] expected_cost: u64,
) {
    let planner = BranchAndBoundPlanner::new(&index);
    let request = PlanRequest {
        region_id: "R".into(),
        max_days,
        max_budget: max_budget.map(Cost::from_major_units),
    };

    let response = planner.plan(&request);
    assert_eq!(offer_ids(&response), expected_ids);
    assert_eq!(response.package.cultural_value, expected_value);
    assert_eq!(
        response.package.total_cost,
        Cost::from_major_units(expected_cost)
    );
    assert_eq!(response.diagnostics.candidates, 3);
}

#[rstest]
#[case::empty_region("E")]
#[case::unknown_region("nowhere")]
fn regions_without_offers_yield_empty_package(index: CatalogIndex, #[case] region: &str) {
    let planner = BranchAndBoundPlanner::new(&index);
    let response = planner.plan(&PlanRequest::new(region));
    assert!(response.package.is_empty());
    assert_eq!(response.package.total_cost, Cost::ZERO);
    assert_eq!(response.package.cultural_value, 0);
    assert_eq!(response.diagnostics.candidates, 0);
    assert_eq!(response.diagnostics.nodes_explored, 1);
}

#[rstest]
fn package_shares_offers_with_catalog(index: CatalogIndex) {
    let planner = BranchAndBoundPlanner::new(&index);
    let response = planner.plan(&PlanRequest::new("R"));
    let chosen = response.package.offers.first().expect("a chosen offer");
    let indexed = index.offers_by_id().get(&chosen.id).expect("indexed offer");
    assert!(Arc::ptr_eq(chosen, indexed));
}

#[rstest]
fn planner_accepts_shared_catalog(index: CatalogIndex) {
    let planner = BranchAndBoundPlanner::new(Arc::new(index));
    let response = planner.plan(&PlanRequest::new("R").with_max_days(3));
    assert_eq!(offer_ids(&response), vec![2]);
    assert_eq!(response.package.cultural_value, 10);
}

fn tie_catalog() -> CatalogIndex {
    CatalogIndex::from_parts(
        [Region::new("T", "Ties")],
        [
            Offer::new(1, "T", "low", Cost::from_major_units(1), 1),
            Offer::new(2, "T", "left", Cost::from_major_units(1), 1),
            Offer::new(3, "T", "right", Cost::from_major_units(1), 1),
        ],
        [
            PointOfInterest::new(1, "small", 2),
            PointOfInterest::new(2, "shared", 6),
        ],
        [
            OfferLink::new(1, 1),
            OfferLink::new(2, 2),
            OfferLink::new(3, 2),
        ],
    )
}

#[rstest]
#[case(CandidateOrder::AscendingId, vec![1, 2])]
#[case(CandidateOrder::DescendingValue, vec![2, 1])]
fn order_changes_traversal_not_value(
    #[case] order: CandidateOrder,
    #[case] expected: Vec<OfferId>,
) {
    let index = tie_catalog();
    let planner = BranchAndBoundPlanner::with_config(&index, BranchAndBoundConfig { order });
    let response = planner.plan(&PlanRequest::new("T"));
    assert_eq!(offer_ids(&response), expected);
    assert_eq!(response.package.cultural_value, 8);
}

#[rstest]
fn descending_order_breaks_value_ties_by_id() {
    let index = tie_catalog();
    let planner = BranchAndBoundPlanner::with_config(
        &index,
        BranchAndBoundConfig {
            order: CandidateOrder::DescendingValue,
        },
    );
    let ids: Vec<OfferId> = planner
        .candidates("T")
        .iter()
        .map(|candidate| candidate.offer.id)
        .collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[rstest]
#[case("ascending-id", CandidateOrder::AscendingId)]
#[case(" descending-value ", CandidateOrder::DescendingValue)]
fn order_parses_from_name(#[case] input: &str, #[case] expected: CandidateOrder) {
    let parsed: CandidateOrder = input.parse().expect("known order");
    assert_eq!(parsed, expected);
    assert_eq!(parsed.to_string(), input.trim());
}

#[rstest]
fn unknown_order_is_rejected() {
    let err = "random".parse::<CandidateOrder>().expect_err("unknown order");
    assert_eq!(err.name, "random");
    assert!(err.to_string().contains("ascending-id"));
}

#[rstest]
fn diagnostics_count_search_work(index: CatalogIndex) {
    let planner = BranchAndBoundPlanner::new(&index);
    let request = PlanRequest::new("R").with_max_budget(Cost::from_major_units(15));
    let diagnostics = planner.plan(&request).diagnostics;
    // Nodes {}, {A}, {B}, {C}. Under {A}, B busts the budget and C overlaps;
    // under {B}, C busts the budget.
    assert_eq!(diagnostics.nodes_explored, 4);
    assert_eq!(diagnostics.pruned_budget, 2);
    assert_eq!(diagnostics.pruned_overlap, 1);
    assert_eq!(diagnostics.incumbent_updates, 3);
}
